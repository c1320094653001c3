//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`command`] - The command trait and exit codes
//! - [`detect`] - The detect command

pub mod args;
pub mod command;
pub mod detect;

pub use args::Cli;
pub use command::{Command, CommandResult, EXIT_ERROR, EXIT_FAIL, EXIT_PASS};
pub use detect::DetectCommand;
