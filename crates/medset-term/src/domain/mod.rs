//! Core navigation logic for the menu.
//!
//! Models describe the closed sets of menu options, keys and navigation outcomes; services
//! hold the banner renderer, keystroke prompt, action dispatcher and output formatting,
//! independent of the concrete terminal and browser integrations.

pub mod models;
pub mod services;
