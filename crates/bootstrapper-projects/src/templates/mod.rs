//! Project templates for bootstrapper.
//!
//! - `catalog`: the two built-in layouts and package name validation
//! - `assets`: helper scripts embedded in the binary and copied into projects
//!
//! # Example Usage
//!
//! ```no_run
//! use bootstrapper_core::{BootstrapConfig, TemplateKind};
//! use bootstrapper_projects::templates::{PackageName, TemplateDescriptor};
//!
//! let config = BootstrapConfig::default();
//! let package = PackageName::parse("widgets").unwrap();
//! let template =
//!     TemplateDescriptor::resolve(TemplateKind::Lightweight, Some(&package), &config).unwrap();
//!
//! assert_eq!(template.folders[0], "widgets");
//! ```

pub mod assets;
pub mod catalog;

pub use assets::{asset_names, copy_template_assets};
pub use catalog::{PackageName, TemplateDescriptor};
