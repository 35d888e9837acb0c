mod pipeline;
mod records;
mod settings;
mod summary;

pub use pipeline::ImportPipeline;
pub use records::{course_patch, generate_password, new_user};
pub use settings::ImportSettings;
pub use summary::ImportSummary;
