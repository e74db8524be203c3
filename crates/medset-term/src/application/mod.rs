//! Application layer driving the menu.
//!
//! This module owns the navigation state machine and the terminal restore used when the
//! process panics mid-prompt.

pub mod navigator;
pub mod ui;
