//! Builds a [`RuleTable`] from a KDL document.
//!
//! ```kdl
//! root "/" {
//!     pattern "*.md" "*.json" {
//!         run "npx" "prettier" "--write" "$@"
//!     }
//! }
//! ```

use super::document::{Document, Node};
use super::rule::{CommandTemplate, GlobPattern, Pattern, Root, RootRules, Rule};
use super::{ConfigError, RuleTable};

pub(super) fn parse_table(doc: &Document) -> Result<RuleTable, ConfigError> {
    let mut roots = Vec::new();
    for node in doc.nodes() {
        match node.name() {
            "root" => roots.push(parse_root(&node)?),
            other => {
                return Err(node.error(format!("unknown node '{other}'; expected root")));
            }
        }
    }
    Ok(RuleTable { roots })
}

/// `root "<dir>" { pattern … }`
fn parse_root(node: &Node<'_>) -> Result<RootRules, ConfigError> {
    let values = node.strings()?;
    let [raw] = values.as_slice() else {
        return Err(node.error("root node requires exactly one directory"));
    };
    let root = Root::parse(raw);

    let children = node
        .children()
        .filter(|children| !children.is_empty())
        .ok_or_else(|| node.error(format!("root \"{raw}\" has no pattern rules")))?;

    let mut rules = Vec::new();
    for child in &children {
        match child.name() {
            "pattern" => rules.push(parse_rule(&root, child)?),
            other => {
                return Err(child.error(format!(
                    "unknown node '{other}' in root \"{raw}\"; expected pattern"
                )));
            }
        }
    }
    Ok(RootRules { root, rules })
}

/// `pattern "<glob>" ["<glob>" …] { run … }`
fn parse_rule(root: &Root, node: &Node<'_>) -> Result<Rule, ConfigError> {
    let line = node.line();
    let values = node.strings()?;
    if values.is_empty() {
        return Err(node.error("pattern node requires at least one glob"));
    }

    let mut globs = values
        .iter()
        .map(|raw| compile(root, raw, line))
        .collect::<Result<Vec<_>, _>>()?;
    let pattern = if globs.len() == 1 {
        Pattern::Single(globs.remove(0))
    } else {
        Pattern::AnyOf(globs)
    };

    let children = node.children().unwrap_or_default();
    let mut commands = Vec::new();
    for child in &children {
        if child.name() != "run" {
            return Err(child.error(format!(
                "unknown node '{}' in pattern; expected run",
                child.name()
            )));
        }
        let tokens = child.strings()?.into_iter().map(String::from).collect();
        let command = CommandTemplate::new(tokens)
            .ok_or_else(|| child.error("run node requires a program"))?;
        commands.push(command);
    }
    if commands.is_empty() {
        return Err(node.error(format!(
            "pattern \"{}\" has no run commands",
            values.join("\" \"")
        )));
    }

    Ok(Rule {
        pattern,
        commands,
        line,
    })
}

fn compile(root: &Root, raw: &str, line: usize) -> Result<GlobPattern, ConfigError> {
    let scoped = root.scope_pattern(raw);
    let matcher = crate::path::compile_glob(&scoped).map_err(|e| ConfigError::InvalidGlob {
        line,
        pattern: raw.to_string(),
        message: e.kind().to_string(),
    })?;
    Ok(GlobPattern {
        raw: raw.to_string(),
        matcher,
    })
}
