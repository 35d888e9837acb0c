use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DestinationUser {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub email: String,
}
