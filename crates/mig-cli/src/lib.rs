//! course-migrate: move courses, users and roles from a legacy authoring
//! installation to a destination instance in two resumable phases.

pub mod app;
pub mod cli;
pub mod error;
pub mod logger;
pub mod prompter;

#[cfg(test)]
mod tests;

pub use cli::{Action, Cli};
pub use error::{CliError, Result};
pub use prompter::TerminalPrompter;
