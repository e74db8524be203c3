/// A single keystroke as seen by the keystroke prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    /// Ctrl-C.
    Interrupt,
    Char(char),
    Other,
}
