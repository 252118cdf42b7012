//! Thin view over the `kdl` crate.
//!
//! The table builder only sees [`Document`] and [`Node`], never KDL entries or
//! spans directly.

use super::ConfigError;

/// A parsed KDL rule table together with its source text.
pub(super) struct Document {
    doc: kdl::KdlDocument,
    source: String,
}

/// One KDL node, carrying the source so errors can name a line.
pub(super) struct Node<'a> {
    node: &'a kdl::KdlNode,
    source: &'a str,
}

impl Document {
    pub(super) fn parse(source: &str) -> Result<Self, ConfigError> {
        let doc: kdl::KdlDocument = source
            .parse()
            .map_err(|e: kdl::KdlError| ConfigError::ParseError(e.to_string()))?;
        Ok(Self {
            doc,
            source: source.to_string(),
        })
    }

    /// Top-level nodes in declaration order.
    pub(super) fn nodes(&self) -> Vec<Node<'_>> {
        wrap(&self.doc, &self.source)
    }
}

fn wrap<'a>(doc: &'a kdl::KdlDocument, source: &'a str) -> Vec<Node<'a>> {
    doc.nodes()
        .iter()
        .map(|node| Node { node, source })
        .collect()
}

impl<'a> Node<'a> {
    pub(super) fn name(&self) -> &'a str {
        self.node.name().value()
    }

    /// All entries as strings.
    ///
    /// Errors when any entry is not a quoted string (numbers, booleans,
    /// properties), since every argument in a rule table is text.
    pub(super) fn strings(&self) -> Result<Vec<&'a str>, ConfigError> {
        self.node
            .entries()
            .iter()
            .map(|entry| {
                if entry.name().is_some() {
                    return Err(self.error(format!(
                        "{} node has a property; only quoted strings are allowed",
                        self.name()
                    )));
                }
                entry.value().as_string().ok_or_else(|| {
                    self.error(format!(
                        "{} node contains non-string values; all entries must be quoted strings",
                        self.name()
                    ))
                })
            })
            .collect()
    }

    /// Child nodes of the `{ … }` block, or `None` when there is no block.
    pub(super) fn children(&self) -> Option<Vec<Node<'a>>> {
        self.node
            .children()
            .map(|doc| wrap(doc, self.source))
    }

    /// 1-based line number of this node in the source.
    pub(super) fn line(&self) -> usize {
        let offset = self.node.span().offset();
        self.source[..offset.min(self.source.len())]
            .bytes()
            .filter(|&b| b == b'\n')
            .count()
            + 1
    }

    /// A parse error pointing at this node's line.
    pub(super) fn error(&self, message: impl std::fmt::Display) -> ConfigError {
        ConfigError::ParseError(format!("line {}: {message}", self.line()))
    }
}
