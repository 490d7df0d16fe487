//! Test doubles for the prompt seam
//!
//! Enabled with the `testing` feature so that other workspace crates can
//! drive interactive flows from their own tests.

#![allow(dead_code)]

use crate::error::{Error, Result};
use crate::prompt::{Notice, Prompter};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Ordered record of interactions shared between test doubles.
///
/// Entries look like `"input: Project name"`, `"confirm: ..."`,
/// `"notice: warning: ..."`, or whatever another double records.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn record(&self, entry: impl Into<String>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry.into());
        }
    }

    /// Snapshot of all entries
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Index of the first entry starting with `prefix`
    pub fn position(&self, prefix: &str) -> Option<usize> {
        self.entries().iter().position(|e| e.starts_with(prefix))
    }
}

/// Prompter that replays a fixed list of answers
///
/// `confirm` treats `y`/`yes` (any case) as yes. `select` accepts either the
/// item index or the item text.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    notices: Vec<(String, String)>,
    confirms: Vec<String>,
    journal: Journal,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Share a journal with other doubles to assert ordering
    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = journal;
        self
    }

    fn next_answer(&mut self, prompt: &str) -> Result<String> {
        self.answers
            .pop_front()
            .ok_or_else(|| Error::prompt_exhausted(prompt))
    }

    /// All notices as `(level, message)`
    pub fn notices(&self) -> &[(String, String)] {
        &self.notices
    }

    /// Messages of warning notices
    pub fn warnings(&self) -> Vec<&str> {
        self.messages_at("warning")
    }

    /// Messages of error notices
    pub fn errors(&self) -> Vec<&str> {
        self.messages_at("error")
    }

    /// Messages of info and success notices
    pub fn infos(&self) -> Vec<&str> {
        self.notices
            .iter()
            .filter(|(level, _)| level == "info" || level == "success")
            .map(|(_, m)| m.as_str())
            .collect()
    }

    fn messages_at(&self, wanted: &str) -> Vec<&str> {
        self.notices
            .iter()
            .filter(|(level, _)| level == wanted)
            .map(|(_, m)| m.as_str())
            .collect()
    }

    /// Prompts of every confirmation asked so far
    pub fn confirms_asked(&self) -> &[String] {
        &self.confirms
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str) -> Result<String> {
        self.journal.record(format!("input: {}", prompt));
        self.next_answer(prompt)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.journal.record(format!("confirm: {}", prompt));
        self.confirms.push(prompt.to_string());
        let answer = self.next_answer(prompt)?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize> {
        self.journal.record(format!("select: {}", prompt));
        let answer = self.next_answer(prompt)?;
        let answer = answer.trim();

        if let Ok(index) = answer.parse::<usize>() {
            if index < items.len() {
                return Ok(index);
            }
        }
        items
            .iter()
            .position(|item| item.eq_ignore_ascii_case(answer))
            .ok_or_else(|| Error::prompt(format!("'{}' is not one of {:?}", answer, items)))
    }

    fn notify(&mut self, notice: Notice<'_>) {
        let level = match notice {
            Notice::Info(_) => "info",
            Notice::Success(_) => "success",
            Notice::Warning(_) => "warning",
            Notice::Error(_) => "error",
        };
        self.journal
            .record(format!("notice: {}: {}", level, notice.message()));
        self.notices
            .push((level.to_string(), notice.message().to_string()));
    }
}
