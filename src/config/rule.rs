use std::fmt;
use std::path::{Path, PathBuf};

use globset::GlobMatcher;

/// Argument token replaced by the edited file's path, relative to the rule's root.
pub const PLACEHOLDER: &str = "$@";

/// The working-directory scope a group of rules applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Root {
    /// Written `"/"`: no scoping, patterns and commands use the current directory.
    Repository,
    /// A directory relative to the current directory, without trailing `/`.
    Dir(String),
}

impl Root {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_end_matches('/');
        if trimmed.is_empty() {
            Root::Repository
        } else {
            Root::Dir(trimmed.to_string())
        }
    }

    /// `pattern` as seen from the current directory.
    pub fn scope_pattern(&self, pattern: &str) -> String {
        match self {
            Root::Repository => pattern.to_string(),
            Root::Dir(dir) => format!("{dir}/{pattern}"),
        }
    }

    /// `path` as seen from inside this root.
    ///
    /// Strips `<root>/` when present; otherwise `path` is returned unchanged.
    pub fn relative_path<'p>(&self, path: &'p str) -> &'p str {
        match self {
            Root::Repository => path,
            Root::Dir(dir) => path
                .strip_prefix(dir.as_str())
                .and_then(|rest| rest.strip_prefix('/'))
                .unwrap_or(path),
        }
    }

    pub fn working_dir(&self, cwd: &Path) -> PathBuf {
        match self {
            Root::Repository => cwd.to_path_buf(),
            Root::Dir(dir) => cwd.join(dir),
        }
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Root::Repository => f.write_str("/"),
            Root::Dir(dir) => f.write_str(dir),
        }
    }
}

/// A compiled glob, already scoped to its root.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    /// Pattern as written in the config.
    pub raw: String,
    pub matcher: GlobMatcher,
}

impl GlobPattern {
    pub fn is_match(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }
}

/// Which paths a rule applies to.
#[derive(Debug, Clone)]
pub enum Pattern {
    Single(GlobPattern),
    /// Matches when any alternative matches.
    AnyOf(Vec<GlobPattern>),
}

impl Pattern {
    pub fn is_match(&self, path: &str) -> bool {
        match self {
            Pattern::Single(glob) => glob.is_match(path),
            Pattern::AnyOf(globs) => globs.iter().any(|glob| glob.is_match(path)),
        }
    }
}

/// A command line with `$@` placeholders. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate(Vec<String>);

impl CommandTemplate {
    /// Returns `None` for an empty token list.
    pub fn new(tokens: Vec<String>) -> Option<Self> {
        if tokens.is_empty() {
            None
        } else {
            Some(Self(tokens))
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn program(&self) -> &str {
        &self.0[0]
    }

    /// The argv to execute, with every placeholder replaced by `path`.
    pub fn render(&self, path: &str) -> Vec<String> {
        self.0
            .iter()
            .map(|token| {
                if token == PLACEHOLDER {
                    path.to_string()
                } else {
                    token.clone()
                }
            })
            .collect()
    }
}

impl fmt::Display for CommandTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// A pattern and the commands to run, in order, when it matches.
#[derive(Debug, Clone)]
pub struct Rule {
    pub pattern: Pattern,
    pub commands: Vec<CommandTemplate>,
    /// 1-based line number in the source file.
    pub line: usize,
}

/// All rules declared under one root.
#[derive(Debug, Clone)]
pub struct RootRules {
    pub root: Root,
    pub rules: Vec<Rule>,
}
