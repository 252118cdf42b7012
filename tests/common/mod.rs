// Shared test helpers for integration tests.
// Used by cli_contract.rs and cli_flows.rs.
#![allow(dead_code)]

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_post-edit-lint"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// A scratch project directory with a rule table at `lint.kdl`.
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new(config: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join("lint.kdl"), config).expect("failed to write config");
        Project { dir }
    }

    /// Canonical project root, as the hook sees it via `current_dir()`.
    pub fn root(&self) -> PathBuf {
        self.dir.path().canonicalize().expect("temp dir should exist")
    }

    pub fn mkdir(&self, rel: &str) {
        std::fs::create_dir_all(self.dir.path().join(rel)).expect("failed to create dir");
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(rel))
            .unwrap_or_else(|e| panic!("failed to read {rel}: {e}"))
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.dir.path().join(rel).exists()
    }

    /// Run the hook with `--config lint.kdl` plus `args`, feeding `stdin`.
    pub fn run(&self, stdin: &str, args: &[&str]) -> (String, String, i32) {
        let mut full = vec!["--log-level", "off", "--config", "lint.kdl"];
        full.extend_from_slice(args);
        run_hook_in(self.dir.path(), stdin, &full)
    }
}

/// Runs the binary in `cwd` with the given stdin and args.
/// Returns (stdout, stderr, exit_code).
pub fn run_hook_in(cwd: &Path, stdin_input: &str, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(binary_path())
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            let write_result = child
                .stdin
                .take()
                .unwrap()
                .write_all(stdin_input.as_bytes());
            if let Err(e) = write_result {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e);
                }
            }
            child.wait_with_output()
        })
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

pub fn post_tool_use_json(tool_name: &str, tool_input: serde_json::Value) -> String {
    serde_json::json!({
        "session_id": "sess-e2e-test",
        "transcript_path": "/tmp/transcript.json",
        "cwd": "/tmp/test",
        "hook_event_name": "PostToolUse",
        "tool_name": tool_name,
        "tool_input": tool_input,
        "tool_response": {"success": true}
    })
    .to_string()
}

pub fn edit_json(file_path: &str) -> String {
    post_tool_use_json("Edit", serde_json::json!({"file_path": file_path}))
}
