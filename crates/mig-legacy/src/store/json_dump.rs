use crate::{
    LegacyAsset, LegacyError, LegacyRole, LegacyStore, LegacyTenant, LegacyUser,
    Result as LegacyErrorResult,
};

use std::path::PathBuf;

use async_trait::async_trait;
use mig_core::RecordId;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

const ROLES: &str = "roles";
const USERS: &str = "users";
const TENANTS: &str = "tenants";
const COURSES: &str = "courses";
const ASSETS: &str = "assets";

/// Legacy store backed by one JSON array file per collection
/// (`<dir>/<collection>.json`), as produced by a document-store dump.
#[derive(Debug, Clone)]
pub struct JsonDumpStore {
    dir: PathBuf,
}

impl JsonDumpStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    async fn collection<T: DeserializeOwned>(&self, name: &str) -> LegacyErrorResult<Vec<T>> {
        let path = self.dir.join(format!("{name}.json"));
        let contents = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| LegacyError::io(&path, e))?;
        let documents: Vec<T> =
            serde_json::from_str(&contents).map_err(|e| LegacyError::json(&path, e))?;

        log::debug!("Read {} document(s) from {}", documents.len(), path.display());
        Ok(documents)
    }
}

#[async_trait]
impl LegacyStore for JsonDumpStore {
    async fn roles(&self) -> LegacyErrorResult<Vec<LegacyRole>> {
        self.collection(ROLES).await
    }

    async fn users(&self) -> LegacyErrorResult<Vec<LegacyUser>> {
        self.collection(USERS).await
    }

    async fn tenants(&self) -> LegacyErrorResult<Vec<LegacyTenant>> {
        self.collection(TENANTS).await
    }

    async fn courses(&self) -> LegacyErrorResult<Vec<Map<String, Value>>> {
        self.collection(COURSES).await
    }

    async fn asset(&self, id: &RecordId) -> LegacyErrorResult<Option<LegacyAsset>> {
        let assets: Vec<LegacyAsset> = self.collection(ASSETS).await?;
        Ok(assets.into_iter().find(|asset| &asset.id == id))
    }
}
