use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DestinationCourse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
}
