//! Lint for methods naming a group the schema does not declare.

use rpcgen_ir::Schema;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// How a method whose group is not declared is treated.
///
/// Grouped listings skip such methods either way; the policy only decides
/// whether that is worth a warning or fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupPolicy {
    /// Warn and leave the method out of grouped listings.
    #[default]
    Omit,
    /// Fail validation.
    Reject,
}

/// Lint that reports methods whose non-empty group is not declared.
pub struct UnknownGroupLint {
    policy: GroupPolicy,
}

impl UnknownGroupLint {
    pub fn new(policy: GroupPolicy) -> Self {
        Self { policy }
    }
}

impl Lint for UnknownGroupLint {
    fn name(&self) -> &'static str {
        "unknown-group"
    }

    fn description(&self) -> &'static str {
        "Check that method groups are declared"
    }

    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
        for method in &schema.methods {
            if method.group.is_empty() || schema.group_named(&method.group).is_some() {
                continue;
            }

            let message = format!(
                "method '{}' belongs to undeclared group '{}'",
                method.name, method.group
            );
            let diag = match self.policy {
                GroupPolicy::Omit => Diagnostic::warning("validate", message),
                GroupPolicy::Reject => Diagnostic::error("validate", message),
            };
            diagnostics.push(diag.at(format!("methods.{}.group", method.name)));
        }
    }
}
