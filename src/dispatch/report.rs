use std::fmt::Write;

use crate::config::{CommandTemplate, Root};
use crate::protocol::HookStatus;

use super::matcher::MatchedCommand;
use super::runner::Outcome;

const SEPARATOR_WIDTH: usize = 50;

/// A command that exited non-zero.
#[derive(Debug)]
pub struct Failure<'t> {
    pub root: &'t Root,
    pub command: &'t CommandTemplate,
    pub outcome: Outcome,
}

/// Aggregated outcomes of one hook run.
#[derive(Debug)]
pub struct Report<'t> {
    /// The path as matched, relative to the current directory when possible.
    pub path: String,
    /// Number of commands executed, failed or not.
    pub executed: usize,
    pub failures: Vec<Failure<'t>>,
}

impl<'t> Report<'t> {
    pub fn new(path: impl Into<String>) -> Self {
        Report {
            path: path.into(),
            executed: 0,
            failures: Vec::new(),
        }
    }

    pub fn record(&mut self, matched: MatchedCommand<'t>, outcome: Outcome) {
        self.executed += 1;
        if !outcome.succeeded() {
            self.failures.push(Failure {
                root: matched.root,
                command: matched.command,
                outcome,
            });
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn status(&self) -> HookStatus {
        if self.has_failures() {
            HookStatus::Blocking
        } else {
            HookStatus::Success
        }
    }

    /// Diagnostics for stderr, one block per failing command.
    ///
    /// Empty when nothing failed.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for failure in &self.failures {
            let _ = writeln!(out, "Linting failed for {}:", self.path);
            let _ = writeln!(out, "Command: {} (in {})", failure.command, failure.root);
            if !failure.outcome.stdout.is_empty() {
                let _ = writeln!(out, "STDOUT:\n{}", failure.outcome.stdout);
            }
            if !failure.outcome.stderr.is_empty() {
                let _ = writeln!(out, "STDERR:\n{}", failure.outcome.stderr);
            }
            let _ = writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH));
        }
        out
    }
}
