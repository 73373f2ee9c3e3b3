//! Pipeline orchestrator.

use eyre::Result;
use rpcgen_ir::Schema;

use super::{CompilationContext, Phase, phases::ValidatePhase};

/// The compilation pipeline orchestrator.
///
/// The pipeline runs the validate phase followed by any user phases.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .validate(ValidatePhase::new().group_policy(GroupPolicy::Reject))
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(schema)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a new pipeline with the default validate phase.
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
        }
    }

    /// Replace the built-in validate phase.
    pub fn validate(mut self, phase: ValidatePhase) -> Self {
        self.validate = phase;
        self
    }

    /// Add a phase to run after validation.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline on a schema.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally, including validation
    /// producing an error diagnostic.
    pub fn run(&self, schema: Schema) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(schema);

        let builtin: [&dyn Phase; 1] = [&self.validate];
        let user = self.phases.iter().map(|phase| phase.as_ref());

        for phase in builtin.into_iter().chain(user) {
            tracing::debug!(phase = phase.name(), "running phase");
            phase.run(&mut ctx)?;
        }

        for diag in ctx.warnings() {
            tracing::warn!(location = diag.location.as_deref(), "{}", diag.message);
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
