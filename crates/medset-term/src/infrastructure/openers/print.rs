use std::io::Write;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::OpenerName;
use crate::domain::models::UrlOpener;
use crate::domain::services::format;
use crate::domain::services::Level;

/// Prints the URL instead of launching anything, for headless and remote sessions.
pub struct PrintOpener {
    out: Mutex<Box<dyn Write + Send>>,
}

impl PrintOpener {
    pub fn new(out: Box<dyn Write + Send>) -> PrintOpener {
        return PrintOpener {
            out: Mutex::new(out),
        };
    }
}

#[async_trait]
impl UrlOpener for PrintOpener {
    fn name(&self) -> OpenerName {
        OpenerName::Print
    }

    async fn open(&self, url: &str) -> Result<()> {
        let line = format(Level::Info, &format!("Open this link: {url}"));
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        out.write_all(line.as_bytes())?;
        out.flush()?;

        Ok(())
    }
}
