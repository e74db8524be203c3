//! Configuration management for the menu.
//!
//! This module provides centralized configuration handling for the banner animation, the
//! URL opener and logging, loaded from defaults, a TOML file and the environment.

mod config;

pub use config::*;
