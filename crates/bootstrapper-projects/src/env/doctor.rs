//! Dependency precheck for the uv package manager

use super::runner::{command_line, CommandRunner};
use crate::error::{Error, Result};
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;
use tracing::debug;

/// Executable driven by the environment initializer
pub const UV: &str = "uv";

/// Where users are sent when uv is missing
pub const UV_INSTALL_URL: &str = "https://docs.astral.sh/uv/getting-started/installation/";

/// Pre-compiled regex for extracting version numbers from command output
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v?(\d+\.\d+(?:\.\d+)?)").expect("version regex is valid"));

/// Result of a successful precheck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolReport {
    pub command: &'static str,
    pub path: PathBuf,
    pub version: Option<String>,
}

/// Check that uv is on PATH, answers `--version`, and is at least `min_version`
pub fn check_uv(runner: &dyn CommandRunner, min_version: &str) -> Result<ToolReport> {
    let path = runner
        .locate(UV)
        .ok_or_else(|| Error::tool_not_found(UV, UV_INSTALL_URL))?;
    debug!("Found {} at {}", UV, path.display());

    let args = ["--version"];
    let output = runner.run(UV, &args).map_err(|source| Error::ToolSpawn {
        command: command_line(UV, &args),
        source,
    })?;

    if !output.success {
        return Err(Error::ToolProbeFailed {
            command: command_line(UV, &args),
            status: output.status_text(),
            stderr: output.diagnostics().to_string(),
            install_url: UV_INSTALL_URL.to_string(),
        });
    }

    let version = parse_version(&output.stdout).or_else(|| parse_version(&output.stderr));
    if let Some(found) = &version {
        if !version_satisfies(found, min_version) {
            return Err(Error::ToolVersionTooOld {
                command: UV.to_string(),
                found: found.clone(),
                required: min_version.to_string(),
                install_url: UV_INSTALL_URL.to_string(),
            });
        }
    }

    Ok(ToolReport {
        command: UV,
        path,
        version,
    })
}

/// Extract the first version-looking token, e.g. `uv 0.5.11 (abc 2024-12-19)` -> `0.5.11`
pub fn parse_version(text: &str) -> Option<String> {
    VERSION_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Pad `major.minor` to `major.minor.0` so semver accepts it
fn pad_version(version: &str) -> String {
    match version.split('.').count() {
        1 => format!("{}.0.0", version),
        2 => format!("{}.0", version),
        _ => version.to_string(),
    }
}

/// Check if actual version satisfies minimum requirement
///
/// Unparseable versions are accepted rather than blocking the user.
pub fn version_satisfies(actual: &str, required: &str) -> bool {
    match (
        semver::Version::parse(&pad_version(actual)),
        semver::Version::parse(&pad_version(required)),
    ) {
        (Ok(actual_ver), Ok(required_ver)) => actual_ver >= required_ver,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRunner;

    #[test]
    fn test_parse_version_uv() {
        assert_eq!(
            parse_version("uv 0.5.11 (c4d0caaee 2024-12-19)"),
            Some("0.5.11".to_string())
        );
        assert_eq!(parse_version("uv 0.4"), Some("0.4".to_string()));
        assert_eq!(parse_version("no digits"), None);
    }

    #[test]
    fn test_version_satisfies() {
        assert!(version_satisfies("0.5.11", "0.4.0"));
        assert!(version_satisfies("0.4", "0.4.0"));
        assert!(!version_satisfies("0.3.9", "0.4.0"));
        assert!(version_satisfies("garbage", "0.4.0"));
    }

    #[test]
    fn test_check_missing_tool() {
        let runner = RecordingRunner::new().missing();
        let result = check_uv(&runner, "0.4.0");

        assert!(matches!(result, Err(Error::ToolNotFound { .. })));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_check_old_tool() {
        let runner = RecordingRunner::new().with_version_output("uv 0.2.1");
        let result = check_uv(&runner, "0.4.0");

        assert!(matches!(result, Err(Error::ToolVersionTooOld { ref found, .. }) if found == "0.2.1"));
    }

    #[test]
    fn test_check_failed_probe() {
        let runner = RecordingRunner::new().fail_on("--version", 1, "broken install");
        let result = check_uv(&runner, "0.4.0");

        assert!(
            matches!(result, Err(Error::ToolProbeFailed { ref stderr, .. }) if stderr == "broken install")
        );
    }

    #[test]
    fn test_every_precheck_failure_names_install_url() {
        let runners = [
            RecordingRunner::new().missing(),
            RecordingRunner::new().with_version_output("uv 0.2.1"),
            RecordingRunner::new().fail_on("--version", 1, "broken install"),
        ];

        for runner in &runners {
            let message = check_uv(runner, "0.4.0").unwrap_err().to_string();
            assert!(message.contains(UV_INSTALL_URL), "no install hint in: {}", message);
        }
    }

    #[test]
    fn test_check_ok() {
        let runner = RecordingRunner::new();
        let report = check_uv(&runner, "0.4.0").unwrap();

        assert_eq!(report.command, "uv");
        assert!(report.version.is_some());
        assert_eq!(runner.calls(), vec!["uv --version"]);
    }
}
