use crate::{CoreError, RecordId, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Course record as written to the export manifest.
///
/// Only the allow-listed catalogue fields survive export; everything else the
/// legacy document carries lives inside the course archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: RecordId,
    pub title: String,
    /// Asset id at extraction time, relative asset path once copied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_shared: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_with_users: Option<Vec<RecordId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_archive_path: Option<String>,
}

impl Course {
    /// Legacy document fields retained on export
    pub const FIELD_ALLOW_LIST: [&'static str; 6] = [
        "_id",
        "title",
        "heroImage",
        "_isShared",
        "_shareWithUsers",
        "createdBy",
    ];

    /// Build a course from a raw legacy document, keeping only allow-listed fields.
    #[track_caller]
    pub fn from_document(document: &Map<String, Value>) -> CoreErrorResult<Self> {
        let document = Self::allowed_fields(document);
        let id = document
            .get("_id")
            .map(|value| record_id("_id", value))
            .transpose()?
            .ok_or_else(|| CoreError::missing_field("_id"))?;

        let title = match document.get("title") {
            Some(Value::String(title)) => title.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => {
                return Err(CoreError::invalid_field("title", other.to_string()));
            }
        };

        let hero_image = match document.get("heroImage") {
            Some(Value::Null) | None => None,
            Some(value) => Some(record_id("heroImage", value)?.to_string()),
        };

        let is_shared = match document.get("_isShared") {
            Some(Value::Bool(shared)) => Some(*shared),
            Some(Value::Null) | None => None,
            Some(other) => {
                return Err(CoreError::invalid_field("_isShared", other.to_string()));
            }
        };

        let shared_with_users = match document.get("_shareWithUsers") {
            Some(Value::Array(users)) => Some(
                users
                    .iter()
                    .map(|value| record_id("_shareWithUsers", value))
                    .collect::<CoreErrorResult<Vec<_>>>()?,
            ),
            Some(Value::Null) | None => None,
            Some(other) => {
                return Err(CoreError::invalid_field(
                    "_shareWithUsers",
                    other.to_string(),
                ));
            }
        };

        let created_by = match document.get("createdBy") {
            Some(Value::Null) | None => None,
            Some(value) => Some(record_id("createdBy", value)?),
        };

        Ok(Self {
            id,
            title,
            hero_image,
            is_shared,
            shared_with_users,
            created_by,
            relative_archive_path: None,
        })
    }

    fn allowed_fields(document: &Map<String, Value>) -> Map<String, Value> {
        Self::FIELD_ALLOW_LIST
            .iter()
            .filter_map(|field| {
                document
                    .get(*field)
                    .map(|value| (field.to_string(), value.clone()))
            })
            .collect()
    }
}

#[track_caller]
fn record_id(field: &'static str, value: &Value) -> CoreErrorResult<RecordId> {
    serde_json::from_value(value.clone())
        .map_err(|e| CoreError::invalid_field(field, e.to_string()))
}
