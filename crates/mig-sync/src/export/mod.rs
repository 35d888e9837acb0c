mod pipeline;
mod settings;
mod summary;

pub use pipeline::ExportPipeline;
pub use settings::ExportSettings;
pub use summary::ExportSummary;
