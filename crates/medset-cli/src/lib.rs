//! Command-line entry point for the Med Datasets menu
//!
//! This crate parses the command line, answers the version query, sets up file logging and
//! wires the concrete terminal, prompt and opener integrations into the menu navigator.

pub mod app;
pub mod cli;
pub mod logging;
