//! imagegate - Pre-flight name validation for image build pipelines.
//!
//! Before an image build commits to minutes or hours of work, imagegate
//! checks that the destination image name is not already registered in the
//! destination catalog. The check runs as a step in a sequential pipeline
//! and halts it when the name is taken or the catalog cannot be queried.
//!
//! # Modules
//!
//! - [`catalog`] - Catalog trait plus in-memory/file and HTTP backends
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`pipeline`] - Step contract, shared context, and sequential runner
//! - [`steps`] - Concrete pipeline steps
//! - [`ui`] - Terminal output and test doubles
//!
//! # Example
//!
//! ```
//! use imagegate::catalog::{ImageRecord, InMemoryCatalog};
//! use imagegate::pipeline::{Step, StepAction, StepContext};
//! use imagegate::steps::PreValidateStep;
//! use imagegate::ui::MockUI;
//!
//! let catalog = InMemoryCatalog::new(vec![ImageRecord::new("ami-abc123", "my-image-v3")]);
//! let mut ui = MockUI::new();
//! let mut ctx = StepContext::new(&mut ui, &catalog);
//!
//! let step = PreValidateStep::new("my-image-v3", Vec::new(), false);
//! assert_eq!(step.run(&mut ctx), StepAction::Halt);
//! assert!(ctx.error().unwrap().to_string().contains("ami-abc123"));
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod steps;
pub mod ui;

pub use error::{ImagegateError, Result};
