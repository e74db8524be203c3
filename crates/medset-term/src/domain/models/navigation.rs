/// Outcome of the keystroke prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationResult {
    Exit,
    Back,
    /// Force-quit requested. The driver ends the process without a farewell.
    Terminate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Farewell,
    ForceQuit,
}

impl Termination {
    /// Every voluntary way out of the menu is a success.
    pub fn exit_code(&self) -> i32 {
        0
    }
}

/// States of the menu state machine. `Terminated` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    FollowUs,
    Terminated(Termination),
}
