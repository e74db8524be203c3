//! Interactive terminal menu for Med Datasets.
//!
//! This crate greets the user with a width-aware banner, presents the main menu and the
//! follow-us submenu, opens the chosen links through the system's default handler, and asks
//! the user through a single raw keystroke whether to leave or return to the menu.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
#[cfg(test)]
pub(crate) mod test_utils;

pub use application::navigator::{Navigator, NavigatorProps};
pub use application::ui::destruct_terminal_for_panic;
pub use configuration::{Config, ConfigKey};
pub use domain::models::{
    FollowUsOption, Key, ListPrompt, MainMenuOption, MedsetError, NavigationResult, Screen,
    TerminalGeometry, Termination, UrlOpener,
};
pub use domain::services::{format, Animation, Console, Level};
