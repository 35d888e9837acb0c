use serde::Deserialize;

/// Response of `auth/local/register`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedUser {
    #[serde(rename = "_id")]
    pub id: String,
}
