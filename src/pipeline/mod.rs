//! Sequential build pipelines.
//!
//! - [`Step`] - the run/cleanup contract every stage implements
//! - [`StepAction`] - the verdict a step returns (`Continue` or `Halt`)
//! - [`StepContext`] - state shared by all steps of one run
//! - [`PipelineRunner`] - runs steps in order and honors halts
//!
//! # Example
//!
//! ```
//! use imagegate::catalog::InMemoryCatalog;
//! use imagegate::pipeline::{PipelineRunner, StepContext};
//! use imagegate::steps::PreValidateStep;
//! use imagegate::ui::MockUI;
//!
//! let mut ui = MockUI::new();
//! let catalog = InMemoryCatalog::default();
//! let mut ctx = StepContext::new(&mut ui, &catalog);
//!
//! let runner = PipelineRunner::new()
//!     .with_step(PreValidateStep::new("my-image-v3", Vec::new(), false));
//! let result = runner.run(&mut ctx);
//! assert!(result.success());
//! ```

pub mod context;
pub mod runner;
pub mod step;

pub use context::{keys, StepContext};
pub use runner::{PipelineResult, PipelineRunner, StepReport};
pub use step::{Step, StepAction};
