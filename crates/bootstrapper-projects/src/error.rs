//! Error types for bootstrapper-projects

use thiserror::Error;

/// Result type alias using bootstrapper-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Project scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Package name is not a valid identifier
    #[error(
        "Invalid package name: '{name}'. Use letters, numbers and underscores, not starting with a number"
    )]
    InvalidPackageName { name: String },

    /// External tool missing from PATH
    #[error("Required command not found: {command}. Install it from {install_url}")]
    ToolNotFound {
        command: String,
        install_url: String,
    },

    /// External tool older than required
    #[error(
        "{command} {found} is too old, version {required} or newer is required. Upgrade it from {install_url}"
    )]
    ToolVersionTooOld {
        command: String,
        found: String,
        required: String,
        install_url: String,
    },

    /// External tool is on PATH but its version probe failed
    #[error("'{command}' failed ({status}): {stderr}. Reinstall it from {install_url}")]
    ToolProbeFailed {
        command: String,
        status: String,
        stderr: String,
        install_url: String,
    },

    /// External tool could not be started
    #[error("Failed to run '{command}': {source}")]
    ToolSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// External tool exited unsuccessfully
    #[error("'{command}' failed ({status}): {stderr}")]
    ToolFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// Working directory could not be switched
    #[error("Cannot switch working directory to {path}: {source}")]
    WorkingDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Embedded asset missing or unreadable
    #[error("Template asset error: {name}")]
    Asset { name: String },

    /// Path is not valid UTF-8
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Core library error
    #[error(transparent)]
    Core(#[from] bootstrapper_core::Error),
}

impl Error {
    /// Create an invalid package name error
    pub fn invalid_package_name(name: impl Into<String>) -> Self {
        Self::InvalidPackageName { name: name.into() }
    }

    /// Create a tool not found error
    pub fn tool_not_found(command: impl Into<String>, install_url: impl Into<String>) -> Self {
        Self::ToolNotFound {
            command: command.into(),
            install_url: install_url.into(),
        }
    }

    /// Create a tool failed error
    pub fn tool_failed(
        command: impl Into<String>,
        status: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::ToolFailed {
            command: command.into(),
            status: status.into(),
            stderr: stderr.into(),
        }
    }

    /// Create an asset error
    pub fn asset(name: impl Into<String>) -> Self {
        Self::Asset { name: name.into() }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }
}
