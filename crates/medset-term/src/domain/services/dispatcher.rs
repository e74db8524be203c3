use anyhow::Result;

use crate::domain::models::UrlOpenerBox;

/// Hands URLs to the injected opener. Opener failures are not retried or translated.
pub struct ActionDispatcher {
    opener: UrlOpenerBox,
}

impl ActionDispatcher {
    pub fn new(opener: UrlOpenerBox) -> ActionDispatcher {
        return ActionDispatcher { opener };
    }

    pub async fn open(&self, url: &str) -> Result<()> {
        tracing::info!(url, opener = %self.opener.name(), "opening resource");
        self.opener.open(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::MedsetError;
    use crate::test_utils::RecordingOpener;

    #[tokio::test]
    async fn it_delegates_to_the_opener() {
        let opener = RecordingOpener::default();
        let opened = opener.opened();

        let dispatcher = ActionDispatcher::new(Box::new(opener));
        dispatcher
            .open("https://link.datamaster.tech/kaggle")
            .await
            .unwrap();

        assert_eq!(
            *opened.lock().unwrap(),
            vec!["https://link.datamaster.tech/kaggle".to_string()]
        );
    }

    #[tokio::test]
    async fn it_propagates_opener_failures() {
        let dispatcher = ActionDispatcher::new(Box::new(RecordingOpener::failing()));

        let err = dispatcher
            .open("https://link.datamaster.tech/main")
            .await
            .unwrap_err();

        match err.downcast_ref::<MedsetError>() {
            Some(MedsetError::Open { url, .. }) => {
                assert_eq!(url, "https://link.datamaster.tech/main");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
