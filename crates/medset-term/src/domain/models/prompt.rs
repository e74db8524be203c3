use anyhow::Result;
use async_trait::async_trait;

/// List-selection prompt. Returns the index of the chosen item.
#[async_trait]
pub trait ListPrompt: Send + Sync {
    async fn select(&self, message: &str, items: &[String]) -> Result<usize>;
}

pub type ListPromptBox = Box<dyn ListPrompt>;
