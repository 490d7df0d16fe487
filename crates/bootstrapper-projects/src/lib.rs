//! # bootstrapper-projects
//!
//! Project scaffolding library for the bootstrapper CLI providing:
//! - Built-in data science and lightweight package layouts
//! - Idempotent folder and starter file creation
//! - Append-only `.gitignore` augmentation
//! - Bundled helper scripts copied into new projects
//! - uv project and virtual environment initialization
//!
//! # Example
//!
//! ```no_run
//! use bootstrapper_projects::scaffold::create_structure;
//! use bootstrapper_projects::templates::TemplateDescriptor;
//! use camino::Utf8Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let template = TemplateDescriptor::data_science();
//! let report = create_structure(
//!     Utf8Path::new("/tmp/projects/demo"),
//!     &template.folders,
//!     &template.files,
//! )?;
//! println!("{} files created", report.created_files.len());
//! # Ok(())
//! # }
//! ```

pub mod env;
pub mod error;
pub mod gitignore;
pub mod scaffold;
pub mod templates;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{Error, Result};
pub use templates::{PackageName, TemplateDescriptor};
