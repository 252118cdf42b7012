//! post-edit-lint: a PostToolUse hook that lints files after they are edited.
//!
//! The edited path is matched against a [`config::RuleTable`] of per-root glob
//! rules. Every matching rule's commands run in declaration order, and any
//! failing command turns the hook result into [`protocol::HookStatus::Blocking`].

pub mod config;
pub mod dispatch;
pub mod logging;
pub mod protocol;

pub(crate) mod cli;
pub(crate) mod path;

use protocol::HookStatus;

/// Run the hook: resolve the edited file, dispatch matching commands, report failures.
///
/// This is the binary entry point. Only the first positional argument names the
/// file; anything in `ignored` is logged and dropped. Library callers that want
/// to inject a rule table or an executor should use [`dispatch::dispatch`]
/// directly.
pub fn run_hook(
    file: Option<&str>,
    ignored: &[String],
    config_path: Option<&std::path::Path>,
    log_level: logging::LogLevel,
) -> HookStatus {
    logging::init(log_level.into());
    if !ignored.is_empty() {
        log::warn!("ignoring extra arguments: {}", ignored.join(" "));
    }
    cli::hook::run(file, config_path)
}
