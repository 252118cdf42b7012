use clap::Parser;
use post_edit_lint::logging::LogLevel;
use std::path::PathBuf;

/// Run linters and formatters on a file after Claude Code edits it.
#[derive(Debug, Parser)]
#[command(name = "post-edit-lint", version, about)]
struct Cli {
    /// File to check. When omitted, a PostToolUse hook payload is read from stdin.
    /// Put `--` first for a path that starts with `-`.
    file: Option<String>,

    /// Arguments after the file are ignored
    #[arg(hide = true)]
    rest: Vec<String>,

    /// Path to the KDL rule table
    #[arg(long)]
    config: Option<PathBuf>,

    /// Verbosity of ~/.local/share/post-edit-lint/hook.log
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

fn main() {
    let cli = Cli::parse();

    let status = post_edit_lint::run_hook(
        cli.file.as_deref(),
        &cli.rest,
        cli.config.as_deref(),
        cli.log_level,
    );
    std::process::exit(status.code());
}
