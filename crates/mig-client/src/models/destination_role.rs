use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationRole {
    #[serde(rename = "_id")]
    pub id: String,
    pub display_name: String,
    /// Stable machine name (e.g. `authuser`)
    pub short_name: String,
}
