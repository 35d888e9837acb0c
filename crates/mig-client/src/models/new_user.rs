use serde::Serialize;

/// Body of `auth/local/register`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    /// Destination role ids
    pub roles: Vec<String>,
}
