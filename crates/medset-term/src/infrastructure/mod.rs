//! Infrastructure layer providing the concrete terminal, prompt and opener integrations.

pub mod openers;
pub mod prompts;
pub mod terminal;
