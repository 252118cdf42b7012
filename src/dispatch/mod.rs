mod matcher;
mod report;
mod runner;

use std::path::Path;

use log::info;

use crate::config::RuleTable;

pub use matcher::{match_commands, MatchedCommand};
pub use report::{Failure, Report};
pub use runner::{run, Executor, Outcome, ProcessExecutor};

/// Run every command matching `path` and collect the outcomes.
///
/// `path` is the cwd-relative form used for matching and in the report.
/// `resolved` is the path exactly as the hook received it; placeholders are
/// filled from it, with the root prefix stripped. Commands run sequentially
/// in match order; a failure never stops later commands.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use post_edit_lint::config::RuleTable;
/// use post_edit_lint::dispatch::{dispatch, Executor, Outcome};
/// use post_edit_lint::protocol::HookStatus;
///
/// struct AlwaysFails;
///
/// impl Executor for AlwaysFails {
///     fn execute(&self, _argv: &[String], _dir: &Path) -> Outcome {
///         Outcome::failed_to_start("nope".to_string())
///     }
/// }
///
/// let table = RuleTable::parse(r#"root "/" { pattern "*.md" { run "lint" "$@" } }"#).unwrap();
///
/// let report = dispatch(&table, "notes.txt", "notes.txt", Path::new("/repo"), &AlwaysFails);
/// assert_eq!(report.executed, 0);
/// assert_eq!(report.status(), HookStatus::Success);
///
/// let report = dispatch(&table, "readme.md", "readme.md", Path::new("/repo"), &AlwaysFails);
/// assert_eq!(report.status(), HookStatus::Blocking);
/// ```
pub fn dispatch<'t, E: Executor + ?Sized>(
    table: &'t RuleTable,
    path: &str,
    resolved: &str,
    cwd: &Path,
    executor: &E,
) -> Report<'t> {
    let matched = match_commands(table, path);
    if matched.is_empty() {
        info!("no rules match {path}");
    }

    let mut report = Report::new(path);
    for entry in matched {
        let outcome = run(executor, entry.root, entry.command, resolved, cwd);
        report.record(entry, outcome);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::HookStatus;
    use std::cell::RefCell;
    use std::path::PathBuf;

    /// Records every call and fails the programs listed in `failing`.
    struct Scripted {
        failing: Vec<&'static str>,
        calls: RefCell<Vec<(Vec<String>, PathBuf)>>,
    }

    impl Scripted {
        fn new(failing: &[&'static str]) -> Self {
            Scripted {
                failing: failing.to_vec(),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn argvs(&self) -> Vec<Vec<String>> {
            self.calls.borrow().iter().map(|(argv, _)| argv.clone()).collect()
        }
    }

    impl Executor for Scripted {
        fn execute(&self, argv: &[String], working_dir: &Path) -> Outcome {
            self.calls
                .borrow_mut()
                .push((argv.to_vec(), working_dir.to_path_buf()));
            let exit_code = if self.failing.iter().any(|program| *program == argv[0]) {
                1
            } else {
                0
            };
            Outcome {
                exit_code,
                stdout: String::new(),
                stderr: format!("{} said no", argv[0]),
            }
        }
    }

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    const FMT_CHECK: &str = r#"
root "/" {
    pattern "src/**/*.ts" {
        run "fmt" "$@"
        run "check" "$@"
    }
}
"#;

    #[test]
    fn both_commands_run_in_order_from_cwd() {
        let table = RuleTable::parse(FMT_CHECK).unwrap();
        let executor = Scripted::new(&[]);

        let report = dispatch(&table, "src/foo.ts", "src/foo.ts", Path::new("/repo"), &executor);

        assert_eq!(report.status(), HookStatus::Success);
        assert_eq!(
            executor.calls.into_inner(),
            vec![
                (argv(&["fmt", "src/foo.ts"]), PathBuf::from("/repo")),
                (argv(&["check", "src/foo.ts"]), PathBuf::from("/repo")),
            ]
        );
    }

    #[test]
    fn first_failure_does_not_stop_second_command() {
        let table = RuleTable::parse(FMT_CHECK).unwrap();
        let executor = Scripted::new(&["fmt"]);

        let report = dispatch(&table, "src/foo.ts", "src/foo.ts", Path::new("/repo"), &executor);

        assert_eq!(report.status(), HookStatus::Blocking);
        assert_eq!(report.executed, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].command.program(), "fmt");
        assert_eq!(
            executor.argvs(),
            vec![argv(&["fmt", "src/foo.ts"]), argv(&["check", "src/foo.ts"])]
        );
    }

    #[test]
    fn second_failure_is_reported() {
        let table = RuleTable::parse(FMT_CHECK).unwrap();
        let executor = Scripted::new(&["check"]);

        let report = dispatch(&table, "src/foo.ts", "src/foo.ts", Path::new("/repo"), &executor);

        assert_eq!(report.status(), HookStatus::Blocking);
        let rendered = report.render();
        assert!(rendered.contains("Linting failed for src/foo.ts:"));
        assert!(rendered.contains("Command: check $@ (in /)"));
        assert!(rendered.contains("STDERR:\ncheck said no"));
        assert!(!rendered.contains("Command: fmt"));
    }

    #[test]
    fn no_match_runs_nothing() {
        let table = RuleTable::parse(FMT_CHECK).unwrap();
        let executor = Scripted::new(&[]);

        let report = dispatch(&table, "nb.ipynb", "nb.ipynb", Path::new("/repo"), &executor);

        assert_eq!(report.status(), HookStatus::Success);
        assert_eq!(report.executed, 0);
        assert!(executor.argvs().is_empty());
    }

    #[test]
    fn executes_exactly_every_matched_command() {
        let table = RuleTable::parse(
            r#"
            root "/" {
                pattern "*.ts" { run "a" "$@"; run "b" "$@"; }
                pattern "src/**" { run "c" "$@"; }
                pattern "*.md" { run "never" "$@"; }
            }
            root "src" {
                pattern "*.ts" { run "d" "$@"; run "e"; }
            }
            "#,
        )
        .unwrap();
        let executor = Scripted::new(&["a", "c", "e"]);

        let path = "src/lib/x.ts";
        let report = dispatch(&table, path, path, Path::new("/repo"), &executor);

        assert_eq!(report.executed, 5);
        assert_eq!(report.failures.len(), 3);
        assert_eq!(
            executor.calls.into_inner(),
            vec![
                (argv(&["a", "src/lib/x.ts"]), PathBuf::from("/repo")),
                (argv(&["b", "src/lib/x.ts"]), PathBuf::from("/repo")),
                (argv(&["c", "src/lib/x.ts"]), PathBuf::from("/repo")),
                (argv(&["d", "lib/x.ts"]), PathBuf::from("/repo/src")),
                (argv(&["e"]), PathBuf::from("/repo/src")),
            ]
        );
    }

    #[test]
    fn placeholder_receives_resolved_path() {
        let table = RuleTable::parse(
            r#"
            root "/" { pattern "src/**/*.ts" { run "fmt" "$@"; } }
            root "src" { pattern "**/*.ts" { run "lint" "$@"; } }
            "#,
        )
        .unwrap();
        let executor = Scripted::new(&[]);

        let report = dispatch(
            &table,
            "src/foo.ts",
            "/repo/src/foo.ts",
            Path::new("/repo"),
            &executor,
        );

        assert_eq!(report.path, "src/foo.ts");
        assert_eq!(
            executor.argvs(),
            vec![
                argv(&["fmt", "/repo/src/foo.ts"]),
                argv(&["lint", "/repo/src/foo.ts"]),
            ]
        );
    }
}
