//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait, the diagnostic sink handed to the detector
//! - [`TerminalUI`] for console output
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use bundle_detect::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.warning("No Ruby version specified");
//! assert_eq!(ui.warnings(), ["No Ruby version specified"]);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, DetectTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a message for something that was skipped.
    fn skipped(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every output mode.
    fn error(&mut self, msg: &str);
}
