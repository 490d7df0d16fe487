//! Persisted bootstrapper settings (`config.json`)
//!
//! The file is read as-is when present. Missing fields are tolerated and
//! resolved through the accessor methods on [`BootstrapConfig`], which hold
//! the documented defaults. When the file is absent, [`ConfigStore::load_or_create`]
//! asks the user for the essentials and writes it once.

use crate::error::{Error, Result};
use crate::paths::get_home_dir;
use crate::prompt::{prompt_for_valid_directory, Notice, Prompter};
use crate::types::TemplateScope;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::{debug, info};

/// Default configuration file name, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Runtime version used when the config does not name one
pub const DEFAULT_PYTHON_VERSION: &str = "3.12";

/// Oldest uv release the scaffolder drives
pub const DEFAULT_MIN_UV_VERSION: &str = "0.4.0";

/// Configuration record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Parent folder for new projects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_project_dir: Option<Utf8PathBuf>,

    /// Runtime version passed to `uv init --python`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_python_version: Option<String>,

    /// Packages offered for installation into every new project
    #[serde(default)]
    pub standard_packages: Vec<String>,

    /// Replaces the built-in data science folder list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_folders: Option<Vec<String>>,

    /// Replaces the built-in data science starter file list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_files: Option<Vec<String>>,

    /// Replaces the built-in data science .gitignore entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gitignore_entries: Option<Vec<String>>,

    /// Template kinds whose .gitignore gets augmented
    #[serde(default = "default_gitignore_scope")]
    pub gitignore_scope: TemplateScope,

    /// Template kinds that receive the bundled helper scripts
    #[serde(default = "default_assets_scope")]
    pub assets_scope: TemplateScope,

    /// Minimum accepted `uv --version`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_uv_version: Option<String>,
}

fn default_gitignore_scope() -> TemplateScope {
    TemplateScope::DataScience
}

fn default_assets_scope() -> TemplateScope {
    TemplateScope::All
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            default_project_dir: None,
            default_python_version: None,
            standard_packages: Vec::new(),
            project_folders: None,
            project_files: None,
            gitignore_entries: None,
            gitignore_scope: default_gitignore_scope(),
            assets_scope: default_assets_scope(),
            min_uv_version: None,
        }
    }
}

impl BootstrapConfig {
    /// Parent folder for new projects: configured, else `~/projects`, else `.`
    pub fn project_dir(&self) -> Utf8PathBuf {
        if let Some(dir) = &self.default_project_dir {
            return dir.clone();
        }

        get_home_dir()
            .and_then(|h| Utf8PathBuf::from_path_buf(h).ok())
            .map(|h| h.join("projects"))
            .unwrap_or_else(|| Utf8PathBuf::from("."))
    }

    /// Runtime version for `uv init`, falling back to [`DEFAULT_PYTHON_VERSION`]
    pub fn python_version(&self) -> &str {
        self.default_python_version
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_PYTHON_VERSION)
    }

    /// Minimum uv version, falling back to [`DEFAULT_MIN_UV_VERSION`]
    pub fn min_uv_version(&self) -> &str {
        self.min_uv_version
            .as_deref()
            .unwrap_or(DEFAULT_MIN_UV_VERSION)
    }

    /// Parse from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Render as JSON with 4-space indentation and a trailing newline
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        buf.push(b'\n');

        String::from_utf8(buf).map_err(|e| Error::invalid_config(e.to_string()))
    }
}

/// Split a comma-separated package answer, dropping blank entries
pub fn parse_package_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

/// Reads and writes the configuration file at an explicit path
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: Utf8PathBuf,
}

impl ConfigStore {
    /// Store backed by `path`
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Whether the backing file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the configuration file
    pub fn load(&self) -> Result<BootstrapConfig> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::config_not_found(self.path.as_str())
            } else {
                Error::Io(e)
            }
        })?;

        debug!("Loaded configuration from {}", self.path);
        BootstrapConfig::from_json(&content)
    }

    /// Write the configuration file, creating parent folders
    pub fn save(&self, config: &BootstrapConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, config.to_json()?)?;

        info!("Saved configuration to {}", self.path);
        Ok(())
    }

    /// Load the file, or ask for the essentials and create it
    pub fn load_or_create<P>(&self, prompter: &mut P) -> Result<BootstrapConfig>
    where
        P: Prompter + ?Sized,
    {
        if self.exists() {
            return self.load();
        }

        prompter.notify(Notice::Info(&format!(
            "No config file found at {}. Creating one...",
            self.path
        )));

        let project_dir =
            prompt_for_valid_directory(prompter, "Enter default folder for future projects")?;
        let python_version =
            prompter.input("Enter preferred default Python version (e.g., 3.12)")?;
        let packages = prompter.input("Enter standard packages (comma-separated)")?;

        let python_version = python_version.trim();
        let config = BootstrapConfig {
            default_project_dir: Some(project_dir),
            default_python_version: (!python_version.is_empty())
                .then(|| python_version.to_string()),
            standard_packages: parse_package_list(&packages),
            ..Default::default()
        };

        self.save(&config)?;
        prompter.notify(Notice::Success(&format!("Config saved to {}", self.path)));

        Ok(config)
    }
}
