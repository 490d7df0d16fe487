//! Project folder creation with a recovery menu
//!
//! ```text
//! CheckParent --exists / confirmed--> Create --ok--> done
//!      |                                 |
//!   declined                           error
//!      v                                 v
//!   Recover <----------------------------+
//!      |-- enter a different location --> CheckParent
//!      |-- use the default folder ------> CheckParent
//!      +-- cancel ----------------------> cancelled
//! ```

use anyhow::Result;
use bootstrapper_core::{BootstrapConfig, Notice, ProjectTarget, Prompter};
use camino::Utf8PathBuf;
use tracing::debug;

use super::prompts::parent_location;

/// Choices offered when the folder cannot be created as requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Recovery {
    ReEnter,
    UseDefault,
    Cancel,
}

impl Recovery {
    const ALL: [Recovery; 3] = [Recovery::ReEnter, Recovery::UseDefault, Recovery::Cancel];

    fn label(&self) -> &'static str {
        match self {
            Self::ReEnter => "Enter a different location",
            Self::UseDefault => "Use the default project folder",
            Self::Cancel => "Cancel",
        }
    }
}

enum Step {
    CheckParent,
    Create,
    Recover,
}

/// Create the project folder, asking before creating a missing parent
///
/// Returns `None` when the user cancels; nothing is created in that case.
pub fn create_project_folder<P>(
    prompter: &mut P,
    target: ProjectTarget,
    config: &BootstrapConfig,
) -> Result<Option<Utf8PathBuf>>
where
    P: Prompter + ?Sized,
{
    let mut target = target;
    let mut step = Step::CheckParent;

    loop {
        step = match step {
            Step::CheckParent => {
                if target.parent.is_dir()
                    || prompter.confirm(&format!(
                        "Parent folder '{}' does not exist. Create it?",
                        target.parent
                    ))?
                {
                    Step::Create
                } else {
                    Step::Recover
                }
            }
            Step::Create => {
                let path = target.path();
                if path.is_dir() {
                    prompter.notify(Notice::Warning(&format!(
                        "Folder {} already exists. Existing files will be kept.",
                        path
                    )));
                }
                match std::fs::create_dir_all(&path) {
                    Ok(()) => {
                        debug!("Project folder ready at {}", path);
                        prompter.notify(Notice::Success(&format!(
                            "Project folder ready: {}",
                            path
                        )));
                        return Ok(Some(path));
                    }
                    Err(e) => {
                        prompter.notify(Notice::Error(&format!(
                            "Could not create {}: {}",
                            path, e
                        )));
                        Step::Recover
                    }
                }
            }
            Step::Recover => {
                let labels = Recovery::ALL.map(|r| r.label());
                let choice = prompter.select("What would you like to do?", &labels)?;
                match Recovery::ALL.get(choice).copied().unwrap_or(Recovery::Cancel) {
                    Recovery::ReEnter => {
                        target = target.with_parent(parent_location(prompter)?);
                        Step::CheckParent
                    }
                    Recovery::UseDefault => {
                        target = target.with_parent(config.project_dir());
                        Step::CheckParent
                    }
                    Recovery::Cancel => return Ok(None),
                }
            }
        };
    }
}
