//! Error types for bootstrapper-core

use thiserror::Error;

/// Result type alias using bootstrapper-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for bootstrapper
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration content
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The terminal prompt could not be read
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// A scripted prompter ran out of answers
    #[error("No answer left for prompt: {prompt}")]
    PromptExhausted { prompt: String },

    /// Path could not be resolved or is not valid UTF-8
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },
}

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt(message.into())
    }

    /// Create a prompt exhausted error
    pub fn prompt_exhausted(prompt: impl Into<String>) -> Self {
        Self::PromptExhausted {
            prompt: prompt.into(),
        }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }
}
