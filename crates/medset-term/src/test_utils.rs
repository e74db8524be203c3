use std::collections::VecDeque;
use std::io;
use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::strip_decoration;
use crate::domain::models::Key;
use crate::domain::models::Keyboard;
use crate::domain::models::ListPrompt;
use crate::domain::models::MedsetError;
use crate::domain::models::OpenerName;
use crate::domain::models::UrlOpener;

/// In-memory output sink whose clones share one buffer.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn contents(&self) -> String {
        return String::from_utf8_lossy(&self.bytes.lock().unwrap()).to_string();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A list prompt that answers with scripted canonical labels.
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<&'static str>>,
    asked: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPrompt {
    pub fn new(answers: Vec<&'static str>) -> ScriptedPrompt {
        return ScriptedPrompt {
            answers: Mutex::new(answers.into()),
            asked: Arc::new(Mutex::new(vec![])),
        };
    }

    /// Prompt messages in the order they were shown.
    pub fn asked(&self) -> Arc<Mutex<Vec<String>>> {
        return self.asked.clone();
    }
}

#[async_trait]
impl ListPrompt for ScriptedPrompt {
    async fn select(&self, message: &str, items: &[String]) -> Result<usize> {
        self.asked.lock().unwrap().push(message.to_string());

        let Some(answer) = self.answers.lock().unwrap().pop_front() else {
            bail!("no scripted answer left for '{message}'");
        };

        match items.iter().position(|e| strip_decoration(e) == answer) {
            Some(index) => Ok(index),
            None => bail!("'{answer}' is not offered by '{message}'"),
        }
    }
}

#[derive(Debug, Default)]
pub struct KeyboardStats {
    pub raw: bool,
    pub enabled: usize,
    pub disabled: usize,
    pub reads: usize,
}

pub struct MockKeyboard {
    keys: VecDeque<Key>,
    interactive: bool,
    stats: Arc<Mutex<KeyboardStats>>,
}

impl MockKeyboard {
    pub fn new(keys: Vec<Key>) -> MockKeyboard {
        return MockKeyboard {
            keys: keys.into(),
            interactive: true,
            stats: Arc::new(Mutex::new(KeyboardStats::default())),
        };
    }

    pub fn non_interactive() -> MockKeyboard {
        return MockKeyboard {
            interactive: false,
            ..MockKeyboard::new(vec![])
        };
    }

    pub fn stats(&self) -> Arc<Mutex<KeyboardStats>> {
        return self.stats.clone();
    }
}

#[async_trait]
impl Keyboard for MockKeyboard {
    fn enable_raw_mode(&mut self) -> Result<()> {
        if !self.interactive {
            bail!(MedsetError::NotInteractive("stdin is not a terminal".to_string()));
        }

        let mut stats = self.stats.lock().unwrap();
        stats.raw = true;
        stats.enabled += 1;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        let mut stats = self.stats.lock().unwrap();
        stats.raw = false;
        stats.disabled += 1;
        Ok(())
    }

    async fn read_key(&mut self) -> Result<Key> {
        let mut stats = self.stats.lock().unwrap();
        if !stats.raw {
            bail!(MedsetError::ListenerInactive);
        }
        stats.reads += 1;

        match self.keys.pop_front() {
            Some(key) => Ok(key),
            None => bail!(MedsetError::InputClosed),
        }
    }
}

/// Records every URL it is asked to open.
#[derive(Default)]
pub struct RecordingOpener {
    opened: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingOpener {
    pub fn failing() -> RecordingOpener {
        return RecordingOpener {
            fail: true,
            ..Default::default()
        };
    }

    pub fn opened(&self) -> Arc<Mutex<Vec<String>>> {
        return self.opened.clone();
    }
}

#[async_trait]
impl UrlOpener for RecordingOpener {
    fn name(&self) -> OpenerName {
        OpenerName::Print
    }

    async fn open(&self, url: &str) -> Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        if self.fail {
            bail!(MedsetError::Open {
                url: url.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no default browser"),
            });
        }

        Ok(())
    }
}
