//! Interactive prompt seam and validation loops
//!
//! Every question the scaffolder asks goes through [`Prompter`], so the
//! terminal implementation (dialoguer, in the CLI crate) and scripted test
//! doubles are interchangeable.
//!
//! Free-text questions that need validation are driven by [`prompt_until`],
//! a small state machine:
//!
//! ```text
//! AwaitingInput --input--> validate --Accept--> Valid (terminal)
//!       ^                      |
//!       |                    Retry
//!       +---- notify <--- Invalid
//! ```

use crate::error::Result;
use crate::paths::resolve_user_path;
use camino::Utf8PathBuf;
use tracing::debug;

/// Severity of a human-facing status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice<'a> {
    /// Progress or neutral information
    Info(&'a str),
    /// Something completed
    Success(&'a str),
    /// Recoverable problem
    Warning(&'a str),
    /// Failed step
    Error(&'a str),
}

impl Notice<'_> {
    /// The message text without severity
    pub fn message(&self) -> &str {
        match self {
            Self::Info(m) | Self::Success(m) | Self::Warning(m) | Self::Error(m) => m,
        }
    }
}

/// Blocking, line-oriented interaction with the user
pub trait Prompter {
    /// Ask for a line of free text. May return an empty string.
    fn input(&mut self, prompt: &str) -> Result<String>;

    /// Ask a yes/no question
    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    /// Pick one of `items`, returning its index
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize>;

    /// Show a status line
    fn notify(&mut self, notice: Notice<'_>);
}

/// Outcome of validating one answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T> {
    /// Answer accepted, loop terminates
    Accept(T),
    /// Answer rejected with guidance, ask again
    Retry(String),
}

enum PromptState<T> {
    AwaitingInput,
    Invalid(String),
    Valid(T),
}

/// Ask `prompt` until `validate` accepts the (trimmed) answer
///
/// The validator receives the prompter so it can ask follow-up questions
/// (for example a confirmation before creating a folder).
pub fn prompt_until<T, P, F>(prompter: &mut P, prompt: &str, mut validate: F) -> Result<T>
where
    P: Prompter + ?Sized,
    F: FnMut(&mut P, &str) -> Result<Validation<T>>,
{
    let mut state = PromptState::AwaitingInput;

    loop {
        state = match state {
            PromptState::AwaitingInput => {
                let answer = prompter.input(prompt)?;
                match validate(prompter, answer.trim())? {
                    Validation::Accept(value) => PromptState::Valid(value),
                    Validation::Retry(guidance) => PromptState::Invalid(guidance),
                }
            }
            PromptState::Invalid(guidance) => {
                prompter.notify(Notice::Warning(&guidance));
                PromptState::AwaitingInput
            }
            PromptState::Valid(value) => return Ok(value),
        };
    }
}

/// Ask until a non-empty answer is given
pub fn prompt_non_empty<P>(prompter: &mut P, prompt: &str, guidance: &str) -> Result<String>
where
    P: Prompter + ?Sized,
{
    prompt_until(prompter, prompt, |_, answer| {
        Ok(if answer.is_empty() {
            Validation::Retry(guidance.to_string())
        } else {
            Validation::Accept(answer.to_string())
        })
    })
}

/// Ask for a folder that exists or that the user agrees to create
///
/// Returns the absolute path. A failure to create the folder is returned as
/// an error rather than retried.
pub fn prompt_for_valid_directory<P>(prompter: &mut P, prompt: &str) -> Result<Utf8PathBuf>
where
    P: Prompter + ?Sized,
{
    prompt_until(prompter, prompt, |prompter, answer| {
        if answer.is_empty() {
            return Ok(Validation::Retry("Folder path can't be empty.".to_string()));
        }

        let path = resolve_user_path(answer)?;
        if path.is_dir() {
            return Ok(Validation::Accept(path));
        }
        if path.exists() {
            return Ok(Validation::Retry(format!(
                "'{}' exists but is not a folder. Please enter a new folder path.",
                path
            )));
        }

        if prompter.confirm(&format!("Folder '{}' does not exist. Create it?", path))? {
            std::fs::create_dir_all(&path)?;
            debug!("Created folder {}", path);
            prompter.notify(Notice::Success(&format!("Created folder: {}", path)));
            Ok(Validation::Accept(path))
        } else {
            Ok(Validation::Retry("Please enter a new folder path.".to_string()))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedPrompter;
    use tempfile::TempDir;

    #[test]
    fn test_prompt_non_empty_retries_blank() {
        let mut p = ScriptedPrompter::new(["", "   ", "demo"]);
        let name = prompt_non_empty(&mut p, "Project name", "Project name can't be empty.").unwrap();

        assert_eq!(name, "demo");
        assert_eq!(p.warnings().len(), 2);
    }

    #[test]
    fn test_prompt_until_propagates_exhaustion() {
        let mut p = ScriptedPrompter::new([""]);
        let result = prompt_non_empty(&mut p, "Project name", "empty");
        assert!(matches!(result, Err(crate::Error::PromptExhausted { .. })));
    }

    #[test]
    fn test_directory_existing_accepted() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_str().unwrap();

        let mut p = ScriptedPrompter::new([dir]);
        let path = prompt_for_valid_directory(&mut p, "Default folder").unwrap();

        assert_eq!(path.as_std_path(), temp.path());
        assert!(p.confirms_asked().is_empty());
    }

    #[test]
    fn test_directory_created_on_confirm() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("a").join("b");

        let mut p = ScriptedPrompter::new([target.to_str().unwrap(), "y"]);
        let path = prompt_for_valid_directory(&mut p, "Default folder").unwrap();

        assert!(target.is_dir());
        assert_eq!(path.as_std_path(), target.as_path());
    }

    #[test]
    fn test_directory_declined_reprompts() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        let existing = temp.path().to_str().unwrap();

        let mut p = ScriptedPrompter::new(["", missing.to_str().unwrap(), "n", existing]);
        let path = prompt_for_valid_directory(&mut p, "Default folder").unwrap();

        assert_eq!(path.as_std_path(), temp.path());
        assert!(!missing.exists());
        assert_eq!(p.warnings().len(), 2);
    }

    #[test]
    fn test_directory_rejects_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();

        let mut p = ScriptedPrompter::new([file.to_str().unwrap(), temp.path().to_str().unwrap()]);
        let path = prompt_for_valid_directory(&mut p, "Default folder").unwrap();

        assert_eq!(path.as_std_path(), temp.path());
        assert!(p.warnings()[0].contains("not a folder"));
    }
}
