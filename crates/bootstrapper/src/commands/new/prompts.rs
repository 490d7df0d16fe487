//! Questions asked while creating a project

use anyhow::Result;
use bootstrapper_core::paths::resolve_user_path;
use bootstrapper_core::prompt::{prompt_non_empty, prompt_until, Validation};
use bootstrapper_core::{BootstrapConfig, Notice, ProjectTarget, Prompter, TemplateKind};
use bootstrapper_projects::PackageName;
use camino::Utf8PathBuf;

/// Ask which template to use
///
/// Anything other than a listed key falls back to the data science layout.
pub fn choose_template<P>(prompter: &mut P) -> Result<TemplateKind>
where
    P: Prompter + ?Sized,
{
    prompter.notify(Notice::Info("Choose the type of project to create:"));
    for kind in TemplateKind::all() {
        prompter.notify(Notice::Info(&format!(
            "  {}) {}",
            kind.menu_key(),
            kind.description()
        )));
    }

    let answer = prompter.input("Enter 1 or 2")?;
    let answer = answer.trim();
    match TemplateKind::from_menu_key(answer) {
        Some(kind) => Ok(kind),
        None => {
            let fallback = TemplateKind::DataScience;
            prompter.notify(Notice::Warning(&format!(
                "'{}' is not a valid choice. Using {}) {}",
                answer,
                fallback.menu_key(),
                fallback.description()
            )));
            Ok(fallback)
        }
    }
}

/// Ask until a valid package identifier is given
pub fn package_name<P>(prompter: &mut P) -> Result<PackageName>
where
    P: Prompter + ?Sized,
{
    let name = prompt_until(
        prompter,
        "Enter the main package name (e.g., my_package)",
        |_, answer| {
            Ok(match PackageName::parse(answer) {
                Ok(name) => Validation::Accept(name),
                Err(e) => Validation::Retry(e.to_string()),
            })
        },
    )?;
    Ok(name)
}

/// A project name must be a single path segment
fn validate_project_name(answer: &str) -> Validation<String> {
    if answer.is_empty() {
        Validation::Retry("Project name can't be empty.".to_string())
    } else if answer == "." || answer == ".." || answer.contains(['/', '\\']) {
        Validation::Retry(format!(
            "'{}' is not a folder name. Leave out path separators.",
            answer
        ))
    } else {
        Validation::Accept(answer.to_string())
    }
}

/// Ask for the project name and where to put it
///
/// A blank location means the configured default folder. Nothing is created.
pub fn project_target<P>(prompter: &mut P, config: &BootstrapConfig) -> Result<ProjectTarget>
where
    P: Prompter + ?Sized,
{
    let name = prompt_until(prompter, "Enter the project name", |_, answer| {
        Ok(validate_project_name(answer))
    })?;

    let default_parent = config.project_dir();
    prompter.notify(Notice::Info(&format!(
        "Default project location: {}",
        default_parent
    )));
    let location = prompter.input(
        "Press Enter to use the default location, or type a different parent folder",
    )?;

    let parent = match location.trim() {
        "" => default_parent,
        custom => resolve_user_path(custom)?,
    };

    Ok(ProjectTarget::new(parent, name))
}

/// Ask for a replacement parent folder (recovery path)
pub fn parent_location<P>(prompter: &mut P) -> Result<Utf8PathBuf>
where
    P: Prompter + ?Sized,
{
    let location = prompt_non_empty(
        prompter,
        "Enter the parent folder for the project",
        "Folder path can't be empty.",
    )?;
    Ok(resolve_user_path(&location)?)
}
