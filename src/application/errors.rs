//! Application layer errors

use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("Plugin error: {0}")]
    Plugin(String),

    #[error("Reply failed: {0}")]
    Reply(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rejected user input. The `Display` text is what the user sees.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("Definitions for phrases are not available.")]
    Phrase,

    #[error("Definitions of words with symbols are not possible.")]
    Symbols,

    #[error("Please enter a word to define.")]
    EmptyWord,
}

/// Remote API errors
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Failed to render text: {0}")]
    Render(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            LookupError::Status(status.as_u16())
        } else if e.is_decode() {
            LookupError::Decode(e.to_string())
        } else if e.is_builder() {
            LookupError::InvalidUrl(e.to_string())
        } else {
            LookupError::Network(e.to_string())
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}
