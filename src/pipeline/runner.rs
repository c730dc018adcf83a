//! Sequential pipeline runner.
//!
//! Runs steps one at a time in insertion order. The first step that returns
//! [`StepAction::Halt`] stops the pipeline. Afterwards every step that ran,
//! including the one that halted, gets its `cleanup` called in reverse order.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::{ImagegateError, Result};
use crate::pipeline::context::StepContext;
use crate::pipeline::step::{Step, StepAction};

/// Outcome of a single step.
#[derive(Debug, Clone)]
pub struct StepReport {
    /// Step name.
    pub name: String,
    /// Verdict the step returned.
    pub action: StepAction,
    /// Time spent in `run`.
    pub duration: Duration,
}

/// Outcome of a whole pipeline run.
#[derive(Debug)]
pub struct PipelineResult {
    /// Reports for each step that ran, in run order.
    pub steps: Vec<StepReport>,
    /// Whether a step halted the pipeline.
    pub halted: bool,
    /// The error recorded by the halting step.
    pub error: Option<ImagegateError>,
    /// Total duration.
    pub duration: Duration,
}

impl PipelineResult {
    /// Check whether every step continued.
    pub fn success(&self) -> bool {
        !self.halted
    }

    /// Name of the step that halted the pipeline, if any.
    pub fn halted_at(&self) -> Option<&str> {
        if !self.halted {
            return None;
        }
        self.steps.last().map(|report| report.name.as_str())
    }

    /// Convert into a `Result`, surfacing the recorded error on halt.
    pub fn into_result(self) -> Result<()> {
        if !self.halted {
            return Ok(());
        }

        let step = self.halted_at().unwrap_or("unknown").to_string();
        Err(self.error.unwrap_or(ImagegateError::Halted { step }))
    }
}

/// Runs a fixed list of steps against a shared context.
#[derive(Default)]
pub struct PipelineRunner {
    steps: Vec<Box<dyn Step>>,
}

impl PipelineRunner {
    /// Create an empty runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step (builder style).
    pub fn with_step(mut self, step: impl Step + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Append a boxed step.
    pub fn add_step(&mut self, step: Box<dyn Step>) {
        self.steps.push(step);
    }

    /// Number of steps in the pipeline.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check whether the pipeline has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step names in run order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Run the pipeline.
    ///
    /// The recorded error, if any, is moved out of the context into the result.
    pub fn run(&self, ctx: &mut StepContext<'_>) -> PipelineResult {
        let start = Instant::now();
        let mut reports = Vec::with_capacity(self.steps.len());
        let mut halted = false;

        for step in &self.steps {
            debug!("Running step '{}'", step.name());
            let step_start = Instant::now();
            let action = step.run(ctx);
            let duration = step_start.elapsed();
            debug!(
                "Step '{}' finished with {} in {:?}",
                step.name(),
                action,
                duration
            );

            reports.push(StepReport {
                name: step.name().to_string(),
                action,
                duration,
            });

            if action.is_halt() {
                halted = true;
                break;
            }
        }

        for step in self.steps[..reports.len()].iter().rev() {
            debug!("Cleaning up step '{}'", step.name());
            step.cleanup(ctx);
        }

        let error = if halted { ctx.take_error() } else { None };
        if halted {
            match &error {
                Some(err) => info!("Pipeline halted: {}", err),
                None => warn!("Pipeline halted without a recorded error"),
            }
        }

        PipelineResult {
            steps: reports,
            halted,
            error,
            duration: start.elapsed(),
        }
    }
}
