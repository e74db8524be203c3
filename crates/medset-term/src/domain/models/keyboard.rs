use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::Key;

/// Keyboard device that can be switched between line-buffered and raw mode.
///
/// `read_key` is only valid while raw mode is enabled; implementations release their key
/// listener when raw mode is disabled.
#[async_trait]
pub trait Keyboard: Send {
    fn enable_raw_mode(&mut self) -> Result<()>;
    fn disable_raw_mode(&mut self) -> Result<()>;
    async fn read_key(&mut self) -> Result<Key>;
}

pub type KeyboardBox = Box<dyn Keyboard>;
