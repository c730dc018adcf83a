//! User-facing output for pipeline runs.
//!
//! This module provides:
//! - [`UserInterface`] trait, the logging collaborator steps talk to
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use imagegate::ui::{create_ui, OutputMode, UserInterface};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("my-image-v3");
//! ui.success("Name is available");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, ImagegateTheme};

/// Trait for user interface interactions.
///
/// Steps report progress through `message` and failures through `error`.
/// Both are fire-and-forget. This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode (e.g. from config settings).
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(ui: &mut dyn UserInterface) {
        ui.message("checking");
        ui.error("conflict");
    }

    #[test]
    fn trait_object_dispatches_to_mock() {
        let mut ui = MockUI::new();
        report(&mut ui);
        assert!(ui.has_message("checking"));
        assert!(ui.has_error("conflict"));
    }
}
