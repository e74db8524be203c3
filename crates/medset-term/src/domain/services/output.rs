use std::io;
use std::io::Write;

use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use yansi::Paint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warn,
    Error,
}

/// Formats one output line: green for success, yellow for warnings, red for errors.
pub fn format(level: Level, message: &str) -> String {
    let line = match level {
        Level::Info => message.to_string(),
        Level::Success => Paint::green(message).to_string(),
        Level::Warn => Paint::yellow(message).to_string(),
        Level::Error => Paint::red(message).to_string(),
    };

    return format!("{line}\n");
}

/// Output sink handed to the navigator and its services.
pub struct Console {
    out: Box<dyn Write + Send>,
}

impl Console {
    pub fn new(out: Box<dyn Write + Send>) -> Console {
        return Console { out };
    }

    pub fn line(&mut self, level: Level, message: &str) -> Result<()> {
        self.out.write_all(format(level, message).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    pub fn info(&mut self, message: &str) -> Result<()> {
        self.line(Level::Info, message)
    }

    pub fn success(&mut self, message: &str) -> Result<()> {
        self.line(Level::Success, message)
    }

    pub fn warn(&mut self, message: &str) -> Result<()> {
        self.line(Level::Warn, message)
    }

    pub fn error(&mut self, message: &str) -> Result<()> {
        self.line(Level::Error, message)
    }

    pub fn clear_screen(&mut self) -> Result<()> {
        crossterm::execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }
}

impl Write for Console {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
