mod document;
mod parse;
pub mod rule;

use std::path::{Path, PathBuf};

use log::{debug, info};

pub use rule::{CommandTemplate, GlobPattern, Pattern, Root, RootRules, Rule, PLACEHOLDER};

use document::Document;

/// Rule table used when no config file is given or discovered.
const DEFAULT_CONFIG: &str = include_str!("../../config.default.kdl");

/// Project-local config, relative to the current directory.
pub const PROJECT_CONFIG: &str = ".claude/post-edit-lint.kdl";

/// The immutable root → pattern → commands table.
///
/// Roots and rules keep their declaration order, which is also the order in
/// which matched commands run.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    pub roots: Vec<RootRules>,
}

/// Errors that can occur when loading or parsing a rule table.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read config: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("invalid KDL: {0}")]
    ParseError(String),
    #[error("line {line}: invalid glob pattern '{pattern}': {message}")]
    InvalidGlob {
        line: usize,
        pattern: String,
        message: String,
    },
}

impl RuleTable {
    /// Load a rule table from a KDL file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::ReadError(e)
            }
        })?;
        Self::parse(&content)
    }

    /// Parse a KDL string into a rule table.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let doc = Document::parse(content)?;
        parse::parse_table(&doc)
    }

    /// The embedded table: TypeScript, Markdown and JSON tooling at the repository root.
    pub fn default_table() -> Result<Self, ConfigError> {
        Self::parse(DEFAULT_CONFIG)
    }

    /// Pick the table for this run.
    ///
    /// An explicit path must exist. Without one, [`PROJECT_CONFIG`] under `cwd`
    /// is used when present, and the embedded default otherwise.
    pub fn locate(explicit: Option<&Path>, cwd: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            info!("using config {}", path.display());
            return Self::load(path);
        }
        let project = cwd.join(PROJECT_CONFIG);
        if project.is_file() {
            info!("using project config {}", project.display());
            return Self::load(&project);
        }
        debug!("no config file; using embedded defaults");
        Self::default_table()
    }
}
