#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use medset_term::{format, Level};

pub const BIN_NAME: &str = "infer-medset";

#[derive(Parser, Debug)]
#[clap(
    name = "infer-medset",
    author,
    about = "Browse and follow Med Datasets from your terminal",
    disable_version_flag = true
)]
pub struct Cli {
    #[clap(short = 'v', long, help = "Print the version and exit")]
    pub version: bool,
}

pub fn version_text() -> String {
    return format!("{BIN_NAME} v{}", env!("CARGO_PKG_VERSION"));
}

impl Cli {
    /// Answers the version query. Returns `true` when the process should stop here.
    pub fn handle_version(&self, out: &mut dyn Write) -> Result<bool> {
        if !self.version {
            return Ok(false);
        }

        out.write_all(format(Level::Info, &version_text()).as_bytes())?;
        out.flush()?;
        return Ok(true);
    }
}
