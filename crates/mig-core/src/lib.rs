pub mod error;
pub mod models;
pub mod reconciler;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::course::Course;
pub use models::export_manifest::ExportManifest;
pub use models::export_status::ExportStatus;
pub use models::failure_kind::FailureKind;
pub use models::id_maps::IdMaps;
pub use models::import_manifest::ImportManifest;
pub use models::import_status::ImportStatus;
pub use models::progress::Progress;
pub use models::record_id::RecordId;
pub use models::role::Role;
pub use models::role_ref::RoleRef;
pub use models::super_user::SuperUser;
pub use models::tenant::Tenant;
pub use models::unit_error::UnitError;
pub use models::user::User;
pub use reconciler::email_index::EmailIndex;
pub use reconciler::role_hints::RoleHints;

/// Current on-disk manifest schema version
pub const SCHEMA_VERSION: u32 = 1;
