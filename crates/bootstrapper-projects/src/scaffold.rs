//! Folder and placeholder file creation
//!
//! Scaffolding is idempotent: existing folders are fine and existing files
//! are never rewritten.

use crate::error::{Error, Result};
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use tracing::debug;

/// What `create_structure` did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Folders ensured, in template order
    pub folders: Vec<Utf8PathBuf>,
    /// Placeholder files written
    pub created_files: Vec<Utf8PathBuf>,
    /// Files left alone because they already existed
    pub skipped_files: Vec<Utf8PathBuf>,
}

/// Placeholder content for a starter file
pub fn placeholder_content(file: &Utf8Path) -> String {
    format!("# {}: Starter file\n", file.file_name().unwrap_or(file.as_str()))
}

/// Join a template-relative path onto `root`, refusing anything that escapes it
fn join_relative(root: &Utf8Path, relative: &str) -> Result<Utf8PathBuf> {
    let rel = Utf8Path::new(relative);
    let escapes = rel
        .components()
        .any(|c| !matches!(c, Utf8Component::Normal(_) | Utf8Component::CurDir));

    if relative.trim().is_empty() || escapes {
        return Err(Error::invalid_path(relative));
    }

    Ok(root.join(rel))
}

/// Create `folders` and placeholder `files` under `root`
///
/// Every file's parent folder is created before the file is written, so file
/// lists do not need to repeat their folders.
pub fn create_structure(
    root: &Utf8Path,
    folders: &[String],
    files: &[String],
) -> Result<ScaffoldReport> {
    let mut report = ScaffoldReport::default();

    for folder in folders {
        let path = join_relative(root, folder)?;
        std::fs::create_dir_all(&path)?;
        debug!("Ensured folder {}", path);
        report.folders.push(path);
    }

    for file in files {
        let path = join_relative(root, file)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        if path.exists() {
            debug!("Keeping existing file {}", path);
            report.skipped_files.push(path);
            continue;
        }

        std::fs::write(&path, placeholder_content(&path))?;
        report.created_files.push(path);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_root(temp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_placeholder_content() {
        assert_eq!(
            placeholder_content(Utf8Path::new("/x/src/train.py")),
            "# train.py: Starter file\n"
        );
    }

    #[test]
    fn test_files_without_listed_parents() {
        let temp = TempDir::new().unwrap();
        let root = utf8_root(&temp);

        let report = create_structure(&root, &[], &strings(&["deep/nested/mod.py"])).unwrap();

        assert_eq!(report.created_files, vec![root.join("deep/nested/mod.py")]);
        assert!(root.join("deep/nested").is_dir());
    }

    #[test]
    fn test_rerun_is_non_destructive() {
        let temp = TempDir::new().unwrap();
        let root = utf8_root(&temp);
        let folders = strings(&["src", "data/raw"]);
        let files = strings(&["src/__init__.py"]);

        create_structure(&root, &folders, &files).unwrap();
        std::fs::write(root.join("src/__init__.py"), "VERSION = 1\n").unwrap();

        let second = create_structure(&root, &folders, &files).unwrap();

        assert!(second.created_files.is_empty());
        assert_eq!(second.skipped_files, vec![root.join("src/__init__.py")]);
        assert_eq!(
            std::fs::read_to_string(root.join("src/__init__.py")).unwrap(),
            "VERSION = 1\n"
        );
    }

    #[test]
    fn test_rejects_escaping_paths() {
        let temp = TempDir::new().unwrap();
        let root = utf8_root(&temp);

        assert!(create_structure(&root, &strings(&["../outside"]), &[]).is_err());
        assert!(create_structure(&root, &[], &strings(&["/etc/passwd"])).is_err());
        assert!(create_structure(&root, &strings(&[""]), &[]).is_err());
    }
}
