use anyhow::Result;
use async_trait::async_trait;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Default, Clone, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum OpenerName {
    #[default]
    Browser,
    Print,
}

impl OpenerName {
    pub fn parse(s: String) -> Option<OpenerName> {
        OpenerName::iter().find(|e| e.to_string() == s)
    }
}

/// Opens a URL with whatever handler the implementation stands for.
#[async_trait]
pub trait UrlOpener: Send + Sync {
    fn name(&self) -> OpenerName;
    async fn open(&self, url: &str) -> Result<()>;
}

pub type UrlOpenerBox = Box<dyn UrlOpener>;
