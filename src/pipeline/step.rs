//! The contract every pipeline step implements.

use crate::pipeline::context::StepContext;

/// What the runner should do after a step finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    /// Proceed to the next step.
    Continue,

    /// Abort the pipeline. The step has recorded an error in the context.
    Halt,
}

impl StepAction {
    /// Check whether this action stops the pipeline.
    pub fn is_halt(&self) -> bool {
        matches!(self, StepAction::Halt)
    }
}

impl std::fmt::Display for StepAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StepAction::Continue => "continue",
            StepAction::Halt => "halt",
        };
        write!(f, "{}", s)
    }
}

/// A unit of work in a sequential pipeline.
///
/// `run` never fails out-of-band: a step that cannot do its job records an
/// error with [`StepContext::set_error`], reports it through the UI, and
/// returns [`StepAction::Halt`].
///
/// The runner calls `cleanup` on every step that ran, whatever the verdict.
pub trait Step {
    /// Short name used in logs and reports.
    fn name(&self) -> &str;

    /// Perform the step's work.
    fn run(&self, ctx: &mut StepContext<'_>) -> StepAction;

    /// Release anything the step acquired during `run`.
    fn cleanup(&self, _ctx: &mut StepContext<'_>) {}
}
