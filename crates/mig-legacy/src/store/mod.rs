mod json_dump;
mod legacy_asset;
mod legacy_role;
mod legacy_tenant;
mod legacy_user;

pub use json_dump::JsonDumpStore;
pub use legacy_asset::LegacyAsset;
pub use legacy_role::LegacyRole;
pub use legacy_tenant::LegacyTenant;
pub use legacy_user::LegacyUser;

use crate::Result as LegacyErrorResult;

use async_trait::async_trait;
use mig_core::RecordId;
use serde_json::{Map, Value};

/// Read-only view of the legacy document store
#[async_trait]
pub trait LegacyStore: Send + Sync {
    async fn roles(&self) -> LegacyErrorResult<Vec<LegacyRole>>;

    async fn users(&self) -> LegacyErrorResult<Vec<LegacyUser>>;

    async fn tenants(&self) -> LegacyErrorResult<Vec<LegacyTenant>>;

    /// Raw course documents, untrimmed
    async fn courses(&self) -> LegacyErrorResult<Vec<Map<String, Value>>>;

    async fn asset(&self, id: &RecordId) -> LegacyErrorResult<Option<LegacyAsset>>;
}
