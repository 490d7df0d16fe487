//! Append-only `.gitignore` augmentation

use crate::error::Result;
use camino::{Utf8Path, Utf8PathBuf};
use std::io::Write;
use tracing::debug;

/// File name written under the project root
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Append `entries` to `<root>/.gitignore`, creating it if needed
///
/// Existing content is kept. If it lacks a trailing newline one is added
/// before the new block. The block always ends with a newline. Entries are
/// not deduplicated.
pub fn append_gitignore(root: &Utf8Path, entries: &[String]) -> Result<Utf8PathBuf> {
    let path = root.join(GITIGNORE_FILE);

    let needs_separator = match std::fs::read(&path) {
        Ok(existing) => !existing.is_empty() && !existing.ends_with(b"\n"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
        Err(e) => return Err(e.into()),
    };

    let mut block = String::new();
    if needs_separator {
        block.push('\n');
    }
    block.push_str(&entries.join("\n"));
    block.push('\n');

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    file.write_all(block.as_bytes())?;

    debug!("Appended {} entries to {}", entries.len(), path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_root(temp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap()
    }

    fn entries(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_creates_new_file() {
        let temp = TempDir::new().unwrap();
        let root = utf8_root(&temp);

        append_gitignore(&root, &entries(&["# data", "data/*"])).unwrap();

        assert_eq!(
            std::fs::read_to_string(root.join(".gitignore")).unwrap(),
            "# data\ndata/*\n"
        );
    }

    #[test]
    fn test_preserves_content_without_trailing_newline() {
        let temp = TempDir::new().unwrap();
        let root = utf8_root(&temp);
        std::fs::write(root.join(".gitignore"), ".venv").unwrap();

        append_gitignore(&root, &entries(&["data/raw/*"])).unwrap();

        assert_eq!(
            std::fs::read_to_string(root.join(".gitignore")).unwrap(),
            ".venv\ndata/raw/*\n"
        );
    }

    #[test]
    fn test_appends_after_trailing_newline() {
        let temp = TempDir::new().unwrap();
        let root = utf8_root(&temp);
        std::fs::write(root.join(".gitignore"), "custom/\n").unwrap();

        append_gitignore(&root, &entries(&["custom/"])).unwrap();

        // No dedup against existing lines
        assert_eq!(
            std::fs::read_to_string(root.join(".gitignore")).unwrap(),
            "custom/\ncustom/\n"
        );
    }
}
