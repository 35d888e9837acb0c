mod export_options;
mod process;

pub use export_options::ExportOptions;
pub use process::{ProcessContentSource, ProcessSettings};

use crate::Result as LegacyErrorResult;

use std::path::PathBuf;

use async_trait::async_trait;
use mig_core::{RecordId, SuperUser};

/// The legacy application's content exporter, with an explicit lifecycle.
///
/// `start` and `await_ready` bring the exporter up; `stop` must be safe to call
/// more than once and after a failed start.
#[async_trait]
pub trait LegacyContentSource: Send {
    async fn start(&mut self) -> LegacyErrorResult<()>;

    async fn await_ready(&mut self) -> LegacyErrorResult<()>;

    /// Identity every subsequent export runs as
    fn set_actor(&mut self, actor: SuperUser);

    /// Export one course, returning the path of the archive it produced
    async fn export_unit(
        &mut self,
        course_id: &RecordId,
        options: ExportOptions,
    ) -> LegacyErrorResult<PathBuf>;

    async fn stop(&mut self) -> LegacyErrorResult<()>;
}
