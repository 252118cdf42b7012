use std::io::Read;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::config::RuleTable;
use crate::dispatch::{self, Executor, ProcessExecutor};
use crate::protocol::{resolve_input, HookStatus};

/// Execute the hook: resolve the edited file, run its linters, report failures on stderr.
///
/// Missing or malformed input is a no-op success. A rule table that fails to
/// load is reported on stderr and blocks, so the misconfiguration is visible.
pub fn run(file: Option<&str>, config_path: Option<&Path>) -> HookStatus {
    let cwd = std::env::current_dir().unwrap_or_else(|e| {
        warn!("cannot determine current directory: {e}");
        PathBuf::from(".")
    });
    execute(
        file,
        std::io::stdin().lock(),
        config_path,
        &cwd,
        &ProcessExecutor,
    )
}

fn execute<R: Read, E: Executor>(
    file: Option<&str>,
    stdin: R,
    config_path: Option<&Path>,
    cwd: &Path,
    executor: &E,
) -> HookStatus {
    let Some(raw) = resolve_input(file, stdin) else {
        info!("no file to check");
        return HookStatus::Success;
    };
    let path = crate::path::relative_to(&raw, cwd);

    let table = match RuleTable::locate(config_path, cwd) {
        Ok(table) => table,
        Err(e) => {
            warn!("config error: {e}");
            eprintln!("post-edit-lint: config error: {e}");
            return HookStatus::Blocking;
        }
    };

    let report = dispatch::dispatch(&table, &path, &raw, cwd, executor);
    if report.has_failures() {
        eprint!("{}", report.render());
    }
    info!(
        "{path}: {} command(s), {} failed",
        report.executed,
        report.failures.len()
    );
    report.status()
}
