//! Validate phase - runs lints on the schema.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{
    DanglingReferenceLint, DuplicateMethodLint, DuplicatePropertyLint, EmptyDescriptionLint,
    FieldShapeLint, GroupPolicy, UnknownGroupLint,
};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the schema using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    ///
    /// Methods naming an unknown group are reported as warnings; see
    /// [`ValidatePhase::group_policy`].
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DanglingReferenceLint),
                Box::new(UnknownGroupLint::new(GroupPolicy::Omit)),
                Box::new(DuplicateMethodLint),
                Box::new(DuplicatePropertyLint),
                Box::new(FieldShapeLint),
                Box::new(EmptyDescriptionLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Choose how methods naming an unknown group are treated.
    pub fn group_policy(mut self, policy: GroupPolicy) -> Self {
        let lint = UnknownGroupLint::new(policy);
        self.lints.retain(|l| l.name() != lint.name());
        self.with_lint(lint)
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check schema integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            lint.check(&ctx.schema, &mut ctx.diagnostics);
        }

        // Warnings are allowed
        if ctx.has_errors() {
            let errors: Vec<String> = ctx
                .errors()
                .map(|d| match &d.location {
                    Some(loc) => format!("error: {}\n  --> {}", d.message, loc),
                    None => format!("error: {}", d.message),
                })
                .collect();
            bail!(
                "validation failed with {} error(s)\n{}",
                ctx.error_count(),
                errors.join("\n")
            );
        }

        Ok(())
    }
}
