//! Doctor command - check that uv is available

use anyhow::Result;
use bootstrapper_core::ConfigStore;
use bootstrapper_projects::env::{check_uv, CommandRunner, SystemRunner};
use camino::Utf8Path;

use crate::output;

/// Run the precheck on its own and report the result
pub fn run(config_path: &Utf8Path) -> Result<()> {
    run_with(&SystemRunner, config_path)
}

fn run_with(runner: &dyn CommandRunner, config_path: &Utf8Path) -> Result<()> {
    output::header("System Check");

    let min_version = super::precheck_min_uv_version(&ConfigStore::new(config_path));
    let report = check_uv(runner, &min_version)?;

    output::kv("Command", report.command);
    output::kv("Path", &report.path.display().to_string());
    output::kv("Version", report.version.as_deref().unwrap_or("unknown"));
    output::kv("Required", &format!(">= {}", min_version));
    println!();
    output::success("uv is ready");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootstrapper_projects::testing::RecordingRunner;
    use bootstrapper_projects::Error;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn missing_config(temp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp.path().join("config.json")).unwrap()
    }

    #[test]
    fn test_doctor_ok() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new();

        run_with(&runner, &missing_config(&temp)).unwrap();
        assert_eq!(runner.calls(), vec!["uv --version"]);
    }

    #[test]
    fn test_doctor_missing_uv() {
        let temp = TempDir::new().unwrap();
        let err = run_with(&RecordingRunner::new().missing(), &missing_config(&temp)).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::ToolNotFound { .. })
        ));
    }

    #[test]
    fn test_doctor_uses_configured_minimum() {
        let temp = TempDir::new().unwrap();
        let path = missing_config(&temp);
        std::fs::write(&path, r#"{"min_uv_version": "9.0"}"#).unwrap();

        let err = run_with(&RecordingRunner::new(), &path).unwrap_err();
        assert!(err.to_string().contains("9.0"));
    }
}
