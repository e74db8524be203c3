use std::io;
use std::process::ExitCode;

use clap::Parser;
use medset_cli::app;
use medset_cli::cli::Cli;
use medset_term::Console;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = app::run(cli).await {
        let mut console = Console::new(Box::new(io::stderr()));
        if console.error(&format!("{err:#}")).is_err() {
            eprintln!("{err:#}");
        }
        return ExitCode::FAILURE;
    }

    return ExitCode::SUCCESS;
}
