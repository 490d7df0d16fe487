//! Test doubles for the command seam
//!
//! Enabled with the `testing` feature.

#![allow(dead_code)]

use crate::env::{command_line, CommandOutput, CommandRunner};
use bootstrapper_core::testing::Journal;
use std::path::PathBuf;
use std::sync::Mutex;

/// Command runner that records invocations and returns scripted results
///
/// Every call succeeds unless a failure was registered with [`fail_on`](Self::fail_on)
/// for one of its arguments.
#[derive(Debug)]
pub struct RecordingRunner {
    calls: Mutex<Vec<String>>,
    working_dirs: Mutex<Vec<PathBuf>>,
    failures: Vec<(String, i32, String)>,
    missing: bool,
    version_output: String,
    journal: Journal,
}

impl Default for RecordingRunner {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            working_dirs: Mutex::new(Vec::new()),
            failures: Vec::new(),
            missing: false,
            version_output: "uv 0.5.11 (c4d0caaee 2024-12-19)".to_string(),
            journal: Journal::new(),
        }
    }
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretend the program is not on PATH
    pub fn missing(mut self) -> Self {
        self.missing = true;
        self
    }

    /// Output of `--version`
    pub fn with_version_output(mut self, output: impl Into<String>) -> Self {
        self.version_output = output.into();
        self
    }

    /// Fail any call that has `arg` among its arguments
    pub fn fail_on(mut self, arg: impl Into<String>, code: i32, stderr: impl Into<String>) -> Self {
        self.failures.push((arg.into(), code, stderr.into()));
        self
    }

    /// Record calls as `run: <command line>` in a shared journal
    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = journal;
        self
    }

    /// Command lines in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Working directory at the time of each call
    pub fn working_dirs(&self) -> Vec<PathBuf> {
        self.working_dirs
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str]) -> std::io::Result<CommandOutput> {
        let line = command_line(program, args);
        self.journal.record(format!("run: {}", line));
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(line);
        }
        if let (Ok(mut dirs), Ok(cwd)) = (self.working_dirs.lock(), std::env::current_dir()) {
            dirs.push(cwd);
        }

        if let Some((_, code, stderr)) = self
            .failures
            .iter()
            .find(|(arg, _, _)| args.contains(&arg.as_str()))
        {
            return Ok(CommandOutput {
                code: Some(*code),
                success: false,
                stdout: String::new(),
                stderr: stderr.clone(),
            });
        }

        let stdout = if args == ["--version"] {
            self.version_output.clone()
        } else {
            String::new()
        };

        Ok(CommandOutput {
            code: Some(0),
            success: true,
            stdout,
            stderr: String::new(),
        })
    }

    fn locate(&self, program: &str) -> Option<PathBuf> {
        (!self.missing).then(|| PathBuf::from("/usr/local/bin").join(program))
    }
}
