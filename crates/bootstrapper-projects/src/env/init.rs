//! Project environment initialization through uv
//!
//! Runs inside the project folder (see [`WorkingDir`]):
//! 1. `uv init --python <version>` (mandatory)
//! 2. `uv venv` (mandatory)
//! 3. `uv add <standard packages...>` after confirmation (best effort)

use super::doctor::UV;
use super::runner::{command_line, CommandOutput, CommandRunner};
use super::workdir::WorkingDir;
use crate::error::{Error, Result};
use bootstrapper_core::{BootstrapConfig, Notice, Prompter};
use camino::Utf8Path;
use tracing::{info, warn};

/// Outcome of the optional package step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageInstall {
    /// The config lists no standard packages
    NotConfigured,
    /// The user chose not to install
    Declined,
    /// `uv add` succeeded with these packages
    Installed(Vec<String>),
    /// `uv add` failed; the project is still usable
    Failed(String),
}

/// What a successful initialization did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub python_version: String,
    pub packages: PackageInstall,
}

fn run_checked(runner: &dyn CommandRunner, args: &[&str]) -> Result<CommandOutput> {
    let command = command_line(UV, args);
    let output = runner
        .run(UV, args)
        .map_err(|source| Error::ToolSpawn {
            command: command.clone(),
            source,
        })?;

    if output.success {
        Ok(output)
    } else {
        Err(Error::tool_failed(
            command,
            output.status_text(),
            output.diagnostics(),
        ))
    }
}

/// Initialize a uv project and virtual environment in `path`
///
/// Returns an error when either mandatory step fails; later steps are not
/// attempted. A failed package install is reported in
/// [`InitReport::packages`] instead. The previous working directory is
/// restored on every path.
pub fn init_project<P>(
    config: &BootstrapConfig,
    path: &Utf8Path,
    runner: &dyn CommandRunner,
    prompter: &mut P,
) -> Result<InitReport>
where
    P: Prompter + ?Sized,
{
    let _cwd = WorkingDir::enter(path)?;
    let python_version = config.python_version().to_string();

    for args in [
        vec!["init", "--python", python_version.as_str()],
        vec!["venv"],
    ] {
        prompter.notify(Notice::Info(&format!(
            "Running: {}",
            command_line(UV, &args)
        )));
        run_checked(runner, &args)?;
    }
    info!("Initialized uv project at {}", path);

    let packages = install_standard_packages(config, runner, prompter)?;

    Ok(InitReport {
        python_version,
        packages,
    })
}

fn install_standard_packages<P>(
    config: &BootstrapConfig,
    runner: &dyn CommandRunner,
    prompter: &mut P,
) -> Result<PackageInstall>
where
    P: Prompter + ?Sized,
{
    if config.standard_packages.is_empty() {
        return Ok(PackageInstall::NotConfigured);
    }

    let listed = config.standard_packages.join(", ");
    if !prompter.confirm(&format!("Install standard packages ({})?", listed))? {
        return Ok(PackageInstall::Declined);
    }

    let mut args = vec!["add"];
    args.extend(config.standard_packages.iter().map(String::as_str));
    prompter.notify(Notice::Info(&format!(
        "Running: {}",
        command_line(UV, &args)
    )));

    match run_checked(runner, &args) {
        Ok(_) => Ok(PackageInstall::Installed(config.standard_packages.clone())),
        Err(e) => {
            warn!("Package installation failed: {}", e);
            Ok(PackageInstall::Failed(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRunner;
    use bootstrapper_core::testing::{Journal, ScriptedPrompter};
    use camino::Utf8PathBuf;
    use serial_test::serial;
    use tempfile::TempDir;

    fn project_dir(temp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap()
    }

    fn config_with_packages(packages: &[&str]) -> BootstrapConfig {
        BootstrapConfig {
            default_python_version: Some("3.11".to_string()),
            standard_packages: packages.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    #[serial]
    fn test_mandatory_steps_then_packages() {
        let temp = TempDir::new().unwrap();
        let journal = Journal::new();
        let runner = RecordingRunner::new().with_journal(journal.clone());
        let mut prompter = ScriptedPrompter::new(["y"]).with_journal(journal.clone());
        let config = config_with_packages(&["numpy", "pandas"]);

        let report = init_project(&config, &project_dir(&temp), &runner, &mut prompter).unwrap();

        assert_eq!(
            runner.calls(),
            vec!["uv init --python 3.11", "uv venv", "uv add numpy pandas"]
        );
        assert_eq!(
            report.packages,
            PackageInstall::Installed(vec!["numpy".to_string(), "pandas".to_string()])
        );

        let venv = journal.position("run: uv venv").unwrap();
        let confirm = journal.position("confirm: Install standard packages").unwrap();
        assert!(venv < confirm);
    }

    #[test]
    #[serial]
    fn test_first_failure_stops_everything() {
        let temp = TempDir::new().unwrap();
        let before = std::env::current_dir().unwrap();
        let runner = RecordingRunner::new().fail_on("init", 2, "No interpreter found");
        let mut prompter = ScriptedPrompter::new(["y"]);
        let config = config_with_packages(&["numpy"]);

        let result = init_project(&config, &project_dir(&temp), &runner, &mut prompter);

        assert!(
            matches!(result, Err(Error::ToolFailed { ref stderr, .. }) if stderr == "No interpreter found")
        );
        assert_eq!(runner.calls(), vec!["uv init --python 3.11"]);
        assert!(prompter.confirms_asked().is_empty());
        assert_eq!(std::env::current_dir().unwrap(), before);
    }

    #[test]
    #[serial]
    fn test_venv_failure_is_fatal() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new().fail_on("venv", 1, "disk full");
        let mut prompter = ScriptedPrompter::new(Vec::<String>::new());

        let result = init_project(
            &BootstrapConfig::default(),
            &project_dir(&temp),
            &runner,
            &mut prompter,
        );

        assert!(result.is_err());
        assert_eq!(runner.calls(), vec!["uv init --python 3.12", "uv venv"]);
    }

    #[test]
    #[serial]
    fn test_package_failure_is_not_fatal() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new().fail_on("add", 1, "resolution failed");
        let mut prompter = ScriptedPrompter::new(["yes"]);
        let config = config_with_packages(&["not-a-real-pkg"]);

        let report = init_project(&config, &project_dir(&temp), &runner, &mut prompter).unwrap();

        assert!(matches!(report.packages, PackageInstall::Failed(ref msg) if msg.contains("resolution failed")));
    }

    #[test]
    #[serial]
    fn test_declined_and_unconfigured_packages() {
        let temp = TempDir::new().unwrap();

        let runner = RecordingRunner::new();
        let mut prompter = ScriptedPrompter::new(["n"]);
        let report = init_project(
            &config_with_packages(&["numpy"]),
            &project_dir(&temp),
            &runner,
            &mut prompter,
        )
        .unwrap();
        assert_eq!(report.packages, PackageInstall::Declined);
        assert_eq!(runner.calls().len(), 2);

        let runner = RecordingRunner::new();
        let mut prompter = ScriptedPrompter::new(Vec::<String>::new());
        let report = init_project(
            &BootstrapConfig::default(),
            &project_dir(&temp),
            &runner,
            &mut prompter,
        )
        .unwrap();
        assert_eq!(report.packages, PackageInstall::NotConfigured);
        assert!(prompter.confirms_asked().is_empty());
    }

    #[test]
    #[serial]
    fn test_runs_inside_project_dir() {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp.path().canonicalize().unwrap()).unwrap();
        let runner = RecordingRunner::new();
        let mut prompter = ScriptedPrompter::new(Vec::<String>::new());

        init_project(&BootstrapConfig::default(), &root, &runner, &mut prompter).unwrap();

        let dirs = runner.working_dirs();
        assert_eq!(dirs.len(), 2);
        assert!(dirs
            .iter()
            .all(|d| d.canonicalize().unwrap() == root.as_std_path()));
    }
}
