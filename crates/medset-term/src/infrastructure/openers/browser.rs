use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::MedsetError;
use crate::domain::models::OpenerName;
use crate::domain::models::UrlOpener;

/// Opens URLs in the system's default browser.
#[derive(Default)]
pub struct BrowserOpener {}

#[async_trait]
impl UrlOpener for BrowserOpener {
    fn name(&self) -> OpenerName {
        OpenerName::Browser
    }

    async fn open(&self, url: &str) -> Result<()> {
        webbrowser::open(url).map_err(|source| MedsetError::Open {
            url: url.to_string(),
            source,
        })?;

        Ok(())
    }
}
