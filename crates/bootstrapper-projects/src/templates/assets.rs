//! Helper scripts bundled into the binary and copied into new projects

use super::catalog::TemplateDescriptor;
use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use tracing::debug;

/// Embedded helper scripts
#[derive(RustEmbed)]
#[folder = "assets/"]
struct TemplateAssets;

/// Extensions decoded as text and rewritten with LF line endings
const TEXT_EXTENSIONS: &[&str] = &[
    "py", "sh", "ps1", "md", "txt", "toml", "cfg", "ini", "json", "yaml", "yml", "rst",
];

/// Names of all bundled assets, sorted
pub fn asset_names() -> Vec<String> {
    let mut names: Vec<String> = TemplateAssets::iter().map(|n| n.to_string()).collect();
    names.sort();
    names
}

/// Whether `name` is copied as normalized text
pub fn is_text_asset(name: &str) -> bool {
    Utf8Path::new(name)
        .extension()
        .map(|ext| {
            TEXT_EXTENSIONS
                .iter()
                .any(|t| t.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Decode as UTF-8 (lossy), drop a BOM and convert CRLF/CR to LF
pub fn normalize_text(data: &[u8]) -> String {
    let text = String::from_utf8_lossy(data);
    let text = text.strip_prefix('\u{feff}').unwrap_or(text.as_ref());
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Write one asset under `dest_dir`, creating folders as needed
pub fn write_asset(name: &str, data: &[u8], dest_dir: &Utf8Path) -> Result<Utf8PathBuf> {
    let target = dest_dir.join(name);
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if is_text_asset(name) {
        std::fs::write(&target, normalize_text(data))?;
    } else {
        std::fs::write(&target, data)?;
    }

    debug!("Copied asset {} to {}", name, target);
    Ok(target)
}

/// Copy every bundled asset into the template's asset folder
///
/// Returns the written paths in name order.
pub fn copy_template_assets(
    project_root: &Utf8Path,
    template: &TemplateDescriptor,
) -> Result<Vec<Utf8PathBuf>> {
    let dest_dir = project_root.join(&template.asset_dir);
    std::fs::create_dir_all(&dest_dir)?;

    asset_names()
        .iter()
        .map(|name| {
            let file = TemplateAssets::get(name).ok_or_else(|| Error::asset(name.as_str()))?;
            write_asset(name, file.data.as_ref(), &dest_dir)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::PackageName;
    use tempfile::TempDir;

    fn utf8_root(temp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap()
    }

    #[test]
    fn test_text_detection() {
        assert!(is_text_asset("setup_env.sh"));
        assert!(is_text_asset("nested/Tool.PY"));
        assert!(!is_text_asset("logo.png"));
        assert!(!is_text_asset("Makefile"));
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text(b"a\r\nb\rc\n"), "a\nb\nc\n");
        assert_eq!(normalize_text("\u{feff}x".as_bytes()), "x");
    }

    #[test]
    fn test_write_asset_text_normalized() {
        let temp = TempDir::new().unwrap();
        let root = utf8_root(&temp);

        let path = write_asset("run.sh", b"echo hi\r\n", &root.join("scripts")).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "echo hi\n");
    }

    #[test]
    fn test_write_asset_binary_untouched() {
        let temp = TempDir::new().unwrap();
        let root = utf8_root(&temp);
        let bytes = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0xff];

        let path = write_asset("img/logo.png", &bytes, &root).unwrap();
        assert_eq!(std::fs::read(path).unwrap(), bytes);
    }

    #[test]
    fn test_bundle_not_empty() {
        assert!(!asset_names().is_empty());
    }

    #[test]
    fn test_copy_into_variant_folder() {
        let temp = TempDir::new().unwrap();
        let root = utf8_root(&temp);

        let ds = copy_template_assets(&root, &TemplateDescriptor::data_science()).unwrap();
        assert_eq!(ds.len(), asset_names().len());
        assert!(ds.iter().all(|p| p.starts_with(root.join("src/tools"))));

        let pkg = PackageName::parse("pkg").unwrap();
        let lw = copy_template_assets(&root, &TemplateDescriptor::lightweight(&pkg)).unwrap();
        assert!(lw.iter().all(|p| p.starts_with(root.join("scripts")) && p.exists()));
    }
}
