use anyhow::Result;
use async_trait::async_trait;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use tokio::task;

use crate::domain::models::ListPrompt;

/// Arrow-key list prompt rendered by dialoguer. It blocks on the terminal, so it runs on
/// the blocking pool.
#[derive(Default)]
pub struct DialoguerPrompt {}

#[async_trait]
impl ListPrompt for DialoguerPrompt {
    async fn select(&self, message: &str, items: &[String]) -> Result<usize> {
        let message = message.to_string();
        let items = items.to_vec();

        let index = task::spawn_blocking(move || {
            Select::with_theme(&ColorfulTheme::default())
                .with_prompt(message)
                .items(&items)
                .default(0)
                .interact()
        })
        .await??;

        tracing::debug!(index, "list selection");
        return Ok(index);
    }
}
