//! Path helpers shared by bootstrapper crates

use crate::error::{Error, Result};
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use std::path::PathBuf;

/// Get the user's home directory
///
/// Prefers the HOME environment variable over dirs::home_dir() so that
/// shells and containers that override HOME are respected.
pub fn get_home_dir() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return Some(PathBuf::from(home));
        }
    }

    dirs::home_dir()
}

/// Expand a leading `~` to the home directory
pub fn expand_tilde(input: &str) -> Utf8PathBuf {
    let home = get_home_dir().and_then(|h| Utf8PathBuf::from_path_buf(h).ok());

    match (input, home) {
        ("~", Some(home)) => home,
        (s, Some(home)) if s.starts_with("~/") => home.join(&s[2..]),
        (s, _) => Utf8PathBuf::from(s),
    }
}

/// Make a path absolute against the current directory and fold `.`/`..` lexically
pub fn absolutize(path: &Utf8Path) -> Result<Utf8PathBuf> {
    let joined = if path.is_absolute() {
        path.to_owned()
    } else {
        let cwd = std::env::current_dir()?;
        let cwd = Utf8PathBuf::from_path_buf(cwd)
            .map_err(|p| Error::invalid_path(p.to_string_lossy()))?;
        cwd.join(path)
    };

    let mut normalized = Utf8PathBuf::new();
    for component in joined.components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_str()),
        }
    }

    Ok(normalized)
}

/// Expand `~` and make absolute, the form every user-entered path is stored in
pub fn resolve_user_path(input: &str) -> Result<Utf8PathBuf> {
    absolutize(&expand_tilde(input.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolutize_keeps_absolute() {
        let p = absolutize(Utf8Path::new("/tmp/projects")).unwrap();
        assert_eq!(p, Utf8PathBuf::from("/tmp/projects"));
    }

    #[test]
    fn test_absolutize_folds_dots() {
        let p = absolutize(Utf8Path::new("/tmp/a/./b/../c")).unwrap();
        assert_eq!(p, Utf8PathBuf::from("/tmp/a/c"));
    }

    #[test]
    fn test_absolutize_relative_is_absolute() {
        let p = absolutize(Utf8Path::new("some/dir")).unwrap();
        assert!(p.is_absolute());
        assert!(p.ends_with("some/dir"));
    }

    #[test]
    fn test_expand_tilde() {
        if let Some(home) = get_home_dir().and_then(|h| Utf8PathBuf::from_path_buf(h).ok()) {
            assert_eq!(expand_tilde("~/projects"), home.join("projects"));
            assert_eq!(expand_tilde("~"), home);
        }
        assert_eq!(expand_tilde("/abs/~x"), Utf8PathBuf::from("/abs/~x"));
        assert_eq!(expand_tilde("~other"), Utf8PathBuf::from("~other"));
    }
}
