use std::path::Path;
use std::process::{Command, Stdio};

use log::{debug, info};

use crate::config::{CommandTemplate, Root};

/// Result of one command: exit code plus captured output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// `-1` when the process was killed by a signal.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl Outcome {
    /// A failure that never reached a running process.
    pub fn failed_to_start(message: String) -> Self {
        Outcome {
            exit_code: 1,
            stdout: String::new(),
            stderr: message,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs a fully rendered argv in a working directory.
///
/// Implementations never fail: every problem becomes a failing [`Outcome`].
pub trait Executor {
    fn execute(&self, argv: &[String], working_dir: &Path) -> Outcome;
}

/// Runs commands as child processes, capturing stdout and stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExecutor;

impl Executor for ProcessExecutor {
    fn execute(&self, argv: &[String], working_dir: &Path) -> Outcome {
        let Some((program, args)) = argv.split_first() else {
            return Outcome::failed_to_start("Empty command".to_string());
        };
        if !working_dir.is_dir() {
            return Outcome::failed_to_start(format!(
                "Working directory not found: {}",
                working_dir.display()
            ));
        }

        let output = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .output();

        match output {
            Ok(output) => Outcome {
                exit_code: output.status.code().unwrap_or(-1),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Outcome::failed_to_start(format!("Command not found: {program}"))
            }
            Err(e) => Outcome::failed_to_start(format!("Failed to run {program}: {e}")),
        }
    }
}

/// Run one matched command for `path`.
///
/// The placeholder receives `path` relative to `root`, and the command runs
/// in `root` under `cwd`.
pub fn run<E: Executor + ?Sized>(
    executor: &E,
    root: &Root,
    template: &CommandTemplate,
    path: &str,
    cwd: &Path,
) -> Outcome {
    let argv = template.render(root.relative_path(path));
    let working_dir = root.working_dir(cwd);
    debug!("running {argv:?} in {}", working_dir.display());

    let outcome = executor.execute(&argv, &working_dir);
    info!("{template} (in {root}) exited with {}", outcome.exit_code);
    outcome
}
