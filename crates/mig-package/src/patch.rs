use serde_json::{Map, Value};

/// Metadata rewritten into a package's `course.json`.
///
/// User ids are destination ids. `hero_image` is relative to the run directory
/// and is replaced with the in-package reference during packaging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoursePatch {
    pub is_shared: Option<bool>,
    pub share_with_users: Option<Vec<String>>,
    pub hero_image: Option<String>,
    pub created_by: Option<String>,
}

impl CoursePatch {
    pub fn is_empty(&self) -> bool {
        self.is_shared.is_none()
            && self.share_with_users.is_none()
            && self.hero_image.is_none()
            && self.created_by.is_none()
    }

    /// Write the patched fields into a course document. `hero_reference` is the
    /// in-package path of the copied hero image.
    pub(crate) fn apply(&self, document: &mut Map<String, Value>, hero_reference: Option<&str>) {
        if let Some(shared) = self.is_shared {
            document.insert("_isShared".to_string(), Value::Bool(shared));
        }
        if let Some(ref users) = self.share_with_users {
            document.insert(
                "_shareWithUsers".to_string(),
                Value::Array(users.iter().cloned().map(Value::String).collect()),
            );
        }
        if let Some(reference) = hero_reference {
            document.insert(
                "heroImage".to_string(),
                Value::String(reference.to_string()),
            );
        }
        if let Some(ref owner) = self.created_by {
            document.insert("createdBy".to_string(), Value::String(owner.clone()));
        }
    }
}
