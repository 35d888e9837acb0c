pub mod course;
pub mod export_manifest;
pub mod export_status;
pub mod failure_kind;
pub mod id_maps;
pub mod import_manifest;
pub mod import_status;
pub mod progress;
pub mod record_id;
pub mod role;
pub mod role_ref;
pub mod super_user;
pub mod tenant;
pub mod unit_error;
pub mod user;

pub(crate) mod ledger;
