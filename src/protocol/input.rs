use std::io::Read;

use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

/// The PostToolUse payload Claude Code writes to stdin.
///
/// Only `tool_input` decides what runs; the event and tool names are logged.
/// Every field is optional and unknown fields are ignored, so payloads from
/// other hook events or newer hosts still parse.
#[derive(Debug, Deserialize)]
pub struct HookInput {
    pub hook_event_name: Option<String>,
    pub tool_name: Option<String>,
    #[serde(default)]
    pub tool_input: Value,
}

/// Why a stdin payload could not be turned into a [`HookInput`].
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("failed to read stdin: {0}")]
    Read(#[from] std::io::Error),
    #[error("invalid hook payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl HookInput {
    /// Read and parse a payload from `reader`.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, PayloadError> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// The edited file: `tool_input.file_path`, else `tool_input.notebook_path`.
    ///
    /// Missing, empty, and non-string values all count as absent.
    pub fn file_path(&self) -> Option<&str> {
        extract_string(&self.tool_input, "file_path")
            .or_else(|| extract_string(&self.tool_input, "notebook_path"))
    }
}

fn extract_string<'a>(tool_input: &'a Value, key: &str) -> Option<&'a str> {
    tool_input
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Find the file to check: the command-line argument if given, else the stdin payload.
///
/// `stdin` is only read when `arg` is `None`. Every failure (unreadable stdin,
/// malformed JSON, no path field) yields `None`, which means there is nothing
/// to do. A broken payload must never block the host.
pub fn resolve_input<R: Read>(arg: Option<&str>, stdin: R) -> Option<String> {
    if let Some(arg) = arg {
        debug!("file path from argument: {arg}");
        return Some(arg).filter(|a| !a.is_empty()).map(String::from);
    }

    let input = match HookInput::from_reader(stdin) {
        Ok(input) => input,
        Err(e) => {
            warn!("no file path from argument or hook payload: {e}");
            return None;
        }
    };

    match input.file_path() {
        Some(path) => {
            debug!(
                "file path from {} {} payload: {path}",
                input.hook_event_name.as_deref().unwrap_or("unknown event"),
                input.tool_name.as_deref().unwrap_or("unknown tool")
            );
            Some(path.to_string())
        }
        None => {
            warn!("hook payload has neither tool_input.file_path nor tool_input.notebook_path");
            None
        }
    }
}
