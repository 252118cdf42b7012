use log::debug;

use crate::config::{CommandTemplate, Root, RuleTable};

/// One command selected for execution, borrowed from the rule table.
#[derive(Debug, Clone, Copy)]
pub struct MatchedCommand<'t> {
    pub root: &'t Root,
    pub command: &'t CommandTemplate,
}

/// Every command whose rule matches `path`, in execution order.
///
/// Order is root declaration order, then rule order within the root, then
/// command order within the rule. A path may match several rules; all of
/// them contribute. No match yields an empty list.
pub fn match_commands<'t>(table: &'t RuleTable, path: &str) -> Vec<MatchedCommand<'t>> {
    let mut matched = Vec::new();
    for scope in &table.roots {
        for rule in &scope.rules {
            if !rule.pattern.is_match(path) {
                continue;
            }
            debug!(
                "{path} matches rule at line {} (root {})",
                rule.line, scope.root
            );
            matched.extend(rule.commands.iter().map(|command| MatchedCommand {
                root: &scope.root,
                command,
            }));
        }
    }
    matched
}
