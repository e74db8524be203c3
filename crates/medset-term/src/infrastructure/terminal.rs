use std::io::IsTerminal;

use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use futures::StreamExt;

use crate::domain::models::Key;
use crate::domain::models::Keyboard;
use crate::domain::models::MedsetError;
use crate::domain::models::TerminalGeometry;

/// Current width of stdout, or the 80 column default when it cannot be read.
pub fn detect_geometry() -> TerminalGeometry {
    match crossterm::terminal::size() {
        Ok((columns, _)) => TerminalGeometry::new(columns),
        Err(err) => {
            tracing::debug!(error = ?err, "terminal size unavailable");
            TerminalGeometry::default()
        }
    }
}

/// Maps a crossterm key event. Release and repeat events yield `None`.
pub fn key_from_event(event: KeyEvent) -> Option<Key> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let key = match event.code {
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char('c') if ctrl => Key::Interrupt,
        // Line feed arrives as Ctrl-J while raw mode is on.
        KeyCode::Char('j') if ctrl => Key::Enter,
        KeyCode::Char('\r') | KeyCode::Char('\n') => Key::Enter,
        KeyCode::Char(c) if !ctrl => Key::Char(c),
        _ => Key::Other,
    };

    return Some(key);
}

/// Keyboard backed by the process terminal. The event stream only exists while raw mode
/// is on.
#[derive(Default)]
pub struct CrosstermKeyboard {
    events: Option<EventStream>,
}

#[async_trait]
impl Keyboard for CrosstermKeyboard {
    fn enable_raw_mode(&mut self) -> Result<()> {
        if !std::io::stdin().is_terminal() {
            return Err(MedsetError::NotInteractive("stdin is not a terminal".to_string()).into());
        }

        crossterm::terminal::enable_raw_mode()
            .map_err(|err| MedsetError::NotInteractive(err.to_string()))?;
        self.events = Some(EventStream::new());

        return Ok(());
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        self.events = None;
        crossterm::terminal::disable_raw_mode()?;

        return Ok(());
    }

    async fn read_key(&mut self) -> Result<Key> {
        let Some(events) = self.events.as_mut() else {
            return Err(MedsetError::ListenerInactive.into());
        };

        loop {
            match events.next().await {
                Some(Ok(CrosstermEvent::Key(event))) => {
                    if let Some(key) = key_from_event(event) {
                        return Ok(key);
                    }
                }
                Some(Ok(_)) => continue,
                Some(Err(err)) => return Err(err.into()),
                None => return Err(MedsetError::InputClosed.into()),
            }
        }
    }
}
