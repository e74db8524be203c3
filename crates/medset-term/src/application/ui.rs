use std::io;

use crossterm::cursor;
use crossterm::style::ResetColor;
use crossterm::terminal::disable_raw_mode;

/// Puts the terminal back into a usable state. Errors are ignored, this runs while the
/// process is already going down.
pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), ResetColor, cursor::Show);
}
