//! Shared project types

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// Project archetype offered by the scaffolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    /// Cookiecutter-style data science layout
    DataScience,
    /// Small package layout with a user-named top-level package
    Lightweight,
}

impl TemplateKind {
    /// Get all template kinds in menu order
    pub fn all() -> [Self; 2] {
        [Self::DataScience, Self::Lightweight]
    }

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DataScience => "data-science",
            Self::Lightweight => "lightweight",
        }
    }

    /// Get description for the template kind
    pub fn description(&self) -> &'static str {
        match self {
            Self::DataScience => "Data Science (cookiecutter style folders and .py starter files)",
            Self::Lightweight => "Lightweight Python (main package named by you)",
        }
    }

    /// Menu key the user types to pick this kind
    pub fn menu_key(&self) -> &'static str {
        match self {
            Self::DataScience => "1",
            Self::Lightweight => "2",
        }
    }

    /// Resolve a menu key ("1" or "2")
    pub fn from_menu_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|k| k.menu_key() == key)
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which template kinds an optional post-scaffold step applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateScope {
    /// Only data science projects
    DataScience,
    /// Every template kind
    All,
    /// Step is disabled
    None,
}

impl TemplateScope {
    /// Whether the step runs for the given template kind
    pub fn includes(&self, kind: TemplateKind) -> bool {
        match self {
            Self::DataScience => kind == TemplateKind::DataScience,
            Self::All => true,
            Self::None => false,
        }
    }
}

/// Where a new project goes: a parent folder plus the project name
///
/// Nothing is created when a target is assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTarget {
    pub parent: Utf8PathBuf,
    pub name: String,
}

impl ProjectTarget {
    pub fn new(parent: impl Into<Utf8PathBuf>, name: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            name: name.into(),
        }
    }

    /// Full project path
    pub fn path(&self) -> Utf8PathBuf {
        self.parent.join(&self.name)
    }

    /// Replace the parent folder, keeping the name
    pub fn with_parent(self, parent: impl AsRef<Utf8Path>) -> Self {
        Self {
            parent: parent.as_ref().to_owned(),
            name: self.name,
        }
    }
}
