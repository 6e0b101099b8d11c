//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait so commands can be tested without a terminal
//! - [`TerminalUI`] writing styled output to stdout/stderr
//! - [`MockUI`] capturing output for assertions
//! - [`PmTheme`] with the console styles used throughout
//!
//! # Example
//!
//! ```
//! use pmpref::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("npm (default)");
//! assert!(ui.has_message("npm"));
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, PmTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
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

    /// Theme used to style inline fragments.
    fn theme(&self) -> &PmTheme;
}
