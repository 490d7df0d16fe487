//! `bootstrapper new` command handler
//!
//! Drives one project creation end to end. Steps run in a fixed order and
//! the first mandatory failure stops the run:
//!
//! 1. uv precheck (before anything is written)
//! 2. load or create the config file
//! 3. template choice, plus a package name for lightweight projects
//! 4. project name and parent folder
//! 5. project folder creation (with a recovery menu)
//! 6. `uv init` and `uv venv`, then optional standard packages
//! 7. folders and starter files
//! 8. `.gitignore` entries
//! 9. bundled helper scripts

mod prompts;
mod target;

use anyhow::{anyhow, Result};
use bootstrapper_core::{ConfigStore, Notice, Prompter, TemplateKind};
use bootstrapper_projects::env::{
    check_uv, init_project, CommandRunner, PackageInstall, SystemRunner,
};
use bootstrapper_projects::gitignore::append_gitignore;
use bootstrapper_projects::scaffold::create_structure;
use bootstrapper_projects::templates::copy_template_assets;
use bootstrapper_projects::{PackageName, TemplateDescriptor};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::info;

use crate::output;
use crate::prompter::TerminalPrompter;

/// What a finished project run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub path: Utf8PathBuf,
    pub kind: TemplateKind,
    pub package: Option<PackageName>,
    pub python_version: String,
    pub packages: PackageInstall,
    pub created_files: usize,
    pub kept_files: usize,
    pub assets: usize,
}

/// How a run ended
#[derive(Debug)]
pub enum Outcome {
    Created(ProjectSummary),
    /// User chose to stop; the project folder was not created
    Cancelled,
    /// A mandatory step failed
    Aborted(String),
}

/// Create a new project interactively
pub fn run(config_path: &Utf8Path) -> Result<()> {
    output::header("Create New Project");

    let mut prompter = TerminalPrompter;
    match create_project(&mut prompter, &SystemRunner, &ConfigStore::new(config_path))? {
        Outcome::Created(summary) => {
            print_summary(&summary);
            Ok(())
        }
        Outcome::Cancelled => Ok(()),
        Outcome::Aborted(reason) => Err(anyhow!(reason)),
    }
}

/// Run every step against the given seams
pub fn create_project<P>(
    prompter: &mut P,
    runner: &dyn CommandRunner,
    store: &ConfigStore,
) -> Result<Outcome>
where
    P: Prompter + ?Sized,
{
    let min_version = super::precheck_min_uv_version(store);
    if let Err(e) = check_uv(runner, &min_version) {
        return Ok(Outcome::Aborted(e.to_string()));
    }

    let config = store.load_or_create(prompter)?;

    let kind = prompts::choose_template(prompter)?;
    let package = match kind {
        TemplateKind::Lightweight => Some(prompts::package_name(prompter)?),
        TemplateKind::DataScience => None,
    };
    let template = TemplateDescriptor::resolve(kind, package.as_ref(), &config)?;

    let target = prompts::project_target(prompter, &config)?;
    let Some(path) = target::create_project_folder(prompter, target, &config)? else {
        prompter.notify(Notice::Warning("Project creation cancelled."));
        return Ok(Outcome::Cancelled);
    };

    let init = match init_project(&config, &path, runner, prompter) {
        Ok(report) => report,
        Err(e) => {
            return Ok(Outcome::Aborted(format!(
                "Environment setup failed in {}: {}",
                path, e
            )))
        }
    };
    match &init.packages {
        PackageInstall::Installed(packages) => prompter.notify(Notice::Success(&format!(
            "Installed {}",
            packages.join(", ")
        ))),
        PackageInstall::Failed(reason) => prompter.notify(Notice::Warning(&format!(
            "Standard packages were not installed: {}",
            reason
        ))),
        PackageInstall::Declined | PackageInstall::NotConfigured => {}
    }

    let report = create_structure(&path, &template.folders, &template.files)?;
    for folder in &report.folders {
        prompter.notify(Notice::Info(&format!("Created folder: {}", folder)));
    }
    for file in &report.created_files {
        prompter.notify(Notice::Info(&format!("Created file: {}", file)));
    }
    for file in &report.skipped_files {
        prompter.notify(Notice::Info(&format!("Kept existing file: {}", file)));
    }

    if config.gitignore_scope.includes(kind) {
        let gitignore = append_gitignore(&path, &template.gitignore_entries)?;
        prompter.notify(Notice::Info(&format!("Updated {}", gitignore)));
    }

    let assets = if config.assets_scope.includes(kind) {
        let written = copy_template_assets(&path, &template)?;
        for asset in &written {
            prompter.notify(Notice::Info(&format!("Copied helper script: {}", asset)));
        }
        written.len()
    } else {
        0
    };

    info!("Created {} project at {}", kind, path);
    prompter.notify(Notice::Success(&format!(
        "Project created successfully at {}",
        path
    )));

    Ok(Outcome::Created(ProjectSummary {
        path,
        kind,
        package,
        python_version: init.python_version,
        packages: init.packages,
        created_files: report.created_files.len(),
        kept_files: report.skipped_files.len(),
        assets,
    }))
}

fn print_summary(summary: &ProjectSummary) {
    output::header("Summary");
    output::kv("Location", summary.path.as_str());
    output::kv("Template", summary.kind.description());
    if let Some(package) = &summary.package {
        output::kv("Package", package.as_str());
    }
    output::kv("Python", &summary.python_version);
    output::kv(
        "Files",
        &format!(
            "{} created, {} kept",
            summary.created_files, summary.kept_files
        ),
    );
    if summary.assets > 0 {
        output::kv("Helper scripts", &summary.assets.to_string());
    }

    println!("\nNext steps:");
    println!("  cd {}", summary.path);
    if matches!(summary.packages, PackageInstall::Failed(_)) {
        println!("  uv add <packages>");
    }
    println!("  uv run python");
}
