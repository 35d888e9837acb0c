//! Checkpointed export and import pipelines.
//!
//! Both phases persist their manifest after every unit of work, so an
//! interrupted run resumes where it stopped without repeating side effects.

pub mod checkpoint;
pub mod error;
pub mod export;
pub mod import;
pub mod prompt;
pub mod resume;
pub mod run_dir;

#[cfg(test)]
mod tests;

pub use error::{MigrateError, Result};
pub use export::{ExportPipeline, ExportSettings, ExportSummary};
pub use import::{ImportPipeline, ImportSettings, ImportSummary};
pub use prompt::{Prompter, ScriptedAnswer, ScriptedPrompter};
pub use resume::{Phase, ResumeAction};
pub use run_dir::{MigrateRoot, RunDir};
