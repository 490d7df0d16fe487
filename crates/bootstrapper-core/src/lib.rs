//! # bootstrapper-core
//!
//! Core library for the bootstrapper CLI providing:
//! - The persisted configuration record (`config.json`) and its first-run creation
//! - The `Prompter` seam used for every interactive question
//! - Validation loops for free-text prompts
//! - Path helpers shared by the other crates

pub mod config;
pub mod error;
pub mod paths;
pub mod prompt;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{BootstrapConfig, ConfigStore};
pub use error::{Error, Result};
pub use prompt::{Notice, Prompter};
pub use types::{ProjectTarget, TemplateKind, TemplateScope};
