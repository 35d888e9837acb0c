use mig_core::RecordId;
use serde::Deserialize;

/// Asset catalogue entry; `path` is relative to the tenant data directory
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyAsset {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub filename: String,
    pub path: String,
}
