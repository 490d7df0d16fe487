//! Built-in project layouts.
//!
//! Folder and file lists are plain data. The data science layout may be
//! replaced field by field from the configuration file; the lightweight
//! layout is generated around the user's package name.

use crate::error::{Error, Result};
use bootstrapper_core::{BootstrapConfig, TemplateKind};

const DATA_SCIENCE_FOLDERS: &[&str] = &[
    "dev_notes",
    "data",
    "data/external",
    "data/interim",
    "data/processed",
    "data/raw",
    "notebooks",
    "reports",
    "reports/figures",
    "src",
    "src/modeling",
    "src/tools",
];

const DATA_SCIENCE_FILES: &[&str] = &[
    "src/__init__.py",
    "src/config.py",
    "src/dataset.py",
    "src/features.py",
    "src/modeling/__init__.py",
    "src/modeling/train.py",
    "src/modeling/predict.py",
    "src/plots.py",
];

// Leading blank lines keep the block apart from whatever uv already wrote.
const DATA_SCIENCE_GITIGNORE: &[&str] = &[
    "",
    "",
    "# data folder",
    "data/external/*",
    "data/interim/*",
    "data/processed/*",
    "data/raw/*",
    "",
    "# dev notes",
    "dev_notes/",
];

const LIGHTWEIGHT_GITIGNORE: &[&str] = &[
    "",
    "",
    "# build artifacts",
    "build/",
    "dist/",
    "*.egg-info/",
    "",
    "# docs build",
    "docs/_build/",
];

/// A validated top-level package name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageName(String);

impl PackageName {
    /// Validate `raw` as an identifier: ASCII letters, digits and
    /// underscores, not starting with a digit
    pub fn parse(raw: &str) -> Result<Self> {
        let name = raw.trim();
        let mut chars = name.chars();

        let valid = match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        };

        if valid {
            Ok(Self(name.to_string()))
        } else {
            Err(Error::invalid_package_name(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Folder and file layout of one project kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    pub kind: TemplateKind,
    /// Relative folders, created in order
    pub folders: Vec<String>,
    /// Relative starter files
    pub files: Vec<String>,
    /// Lines appended to `.gitignore`
    pub gitignore_entries: Vec<String>,
    /// Relative folder receiving the bundled helper scripts
    pub asset_dir: String,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl TemplateDescriptor {
    /// Built-in data science layout
    pub fn data_science() -> Self {
        Self {
            kind: TemplateKind::DataScience,
            folders: owned(DATA_SCIENCE_FOLDERS),
            files: owned(DATA_SCIENCE_FILES),
            gitignore_entries: owned(DATA_SCIENCE_GITIGNORE),
            asset_dir: "src/tools".to_string(),
        }
    }

    /// Lightweight layout with `package` as the top-level source folder
    pub fn lightweight(package: &PackageName) -> Self {
        let pkg = package.as_str();
        Self {
            kind: TemplateKind::Lightweight,
            folders: vec![
                pkg.to_string(),
                "scripts".to_string(),
                "docs".to_string(),
                "tests".to_string(),
            ],
            files: vec![
                format!("{pkg}/__init__.py"),
                format!("{pkg}/core.py"),
                format!("{pkg}/helpers.py"),
                "docs/conf.py".to_string(),
                "docs/index.rst".to_string(),
                "tests/test_basic.py".to_string(),
                "tests/test_advanced.py".to_string(),
            ],
            gitignore_entries: owned(LIGHTWEIGHT_GITIGNORE),
            asset_dir: "scripts".to_string(),
        }
    }

    /// Layout for `kind`, applying overrides from the configuration file
    ///
    /// `package` is required for [`TemplateKind::Lightweight`].
    pub fn resolve(
        kind: TemplateKind,
        package: Option<&PackageName>,
        config: &BootstrapConfig,
    ) -> Result<Self> {
        match kind {
            TemplateKind::DataScience => {
                let mut descriptor = Self::data_science();
                if let Some(folders) = &config.project_folders {
                    descriptor.folders = folders.clone();
                }
                if let Some(files) = &config.project_files {
                    descriptor.files = files.clone();
                }
                if let Some(entries) = &config.gitignore_entries {
                    descriptor.gitignore_entries = entries.clone();
                }
                Ok(descriptor)
            }
            TemplateKind::Lightweight => {
                let package = package.ok_or_else(|| Error::invalid_package_name(""))?;
                Ok(Self::lightweight(package))
            }
        }
    }
}
