#[cfg(test)]
#[path = "keystroke_test.rs"]
mod tests;

use anyhow::Result;

use super::Console;
use crate::domain::models::Key;
use crate::domain::models::Keyboard;
use crate::domain::models::KeyboardBox;
use crate::domain::models::NavigationResult;

pub const KEYSTROKE_INSTRUCTION: &str = "\nPress Enter to exit or Esc to return to menu...";

/// Maps a keystroke to its outcome. Unrecognized keys keep the prompt waiting.
pub fn decide(key: Key) -> Option<NavigationResult> {
    match key {
        Key::Enter => Some(NavigationResult::Exit),
        Key::Escape => Some(NavigationResult::Back),
        Key::Interrupt | Key::Char('q') => Some(NavigationResult::Terminate),
        _ => None,
    }
}

/// Holds the keyboard in raw mode for as long as it lives.
pub struct RawModeGuard<'a> {
    keyboard: &'a mut dyn Keyboard,
}

impl<'a> RawModeGuard<'a> {
    pub fn acquire(keyboard: &'a mut dyn Keyboard) -> Result<RawModeGuard<'a>> {
        keyboard.enable_raw_mode()?;
        return Ok(RawModeGuard { keyboard });
    }

    pub async fn read_key(&mut self) -> Result<Key> {
        self.keyboard.read_key().await
    }
}

impl Drop for RawModeGuard<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.keyboard.disable_raw_mode() {
            tracing::warn!(error = ?err, "failed to restore line mode");
        }
    }
}

pub struct KeystrokePrompt {
    keyboard: KeyboardBox,
}

impl KeystrokePrompt {
    pub fn new(keyboard: KeyboardBox) -> KeystrokePrompt {
        return KeystrokePrompt { keyboard };
    }

    /// Blocks until Enter, Esc, `q` or Ctrl-C arrives. Line mode is restored before this
    /// returns, whatever the outcome.
    pub async fn wait_for_decision(&mut self, console: &mut Console) -> Result<NavigationResult> {
        console.info(KEYSTROKE_INSTRUCTION)?;

        let mut guard = RawModeGuard::acquire(self.keyboard.as_mut())?;
        loop {
            let key = guard.read_key().await?;
            if let Some(result) = decide(key) {
                tracing::debug!(?key, ?result, "keystroke decision");
                return Ok(result);
            }

            tracing::trace!(?key, "ignored keystroke");
        }
    }
}
