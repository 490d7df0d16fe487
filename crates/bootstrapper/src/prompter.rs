//! Terminal implementation of the prompt seam

use bootstrapper_core::{Error, Notice, Prompter, Result};
use dialoguer::{Confirm, Input, Select};

use crate::output;

/// Prompter backed by dialoguer on the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

fn prompt_error(e: dialoguer::Error) -> Error {
    Error::prompt(e.to_string())
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(prompt_error)
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .map_err(prompt_error)
    }

    fn notify(&mut self, notice: Notice<'_>) {
        output::notice(notice);
    }
}
