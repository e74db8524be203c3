use thiserror::Error;

#[derive(Error, Debug)]
pub enum MedsetError {
    #[error("An interactive terminal is required: {0}")]
    NotInteractive(String),
    #[error("Keyboard input stream closed")]
    InputClosed,
    #[error("Keyboard listener is not active, raw mode must be enabled before reading keys")]
    ListenerInactive,
    #[error("Selection {index} is outside the {offered} offered options")]
    InvalidSelection { index: usize, offered: usize },
    #[error("Failed to open '{url}': {source}")]
    Open {
        url: String,
        #[source]
        source: std::io::Error,
    },
}
