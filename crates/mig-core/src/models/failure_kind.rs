use serde::{Deserialize, Serialize};

/// Failure taxonomy recorded on unit error entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FailureKind {
    Configuration,
    Authentication,
    DataIntegrity,
    Storage,
    RemoteOperation,
    Cancelled,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Authentication => "authentication",
            Self::DataIntegrity => "dataIntegrity",
            Self::Storage => "storage",
            Self::RemoteOperation => "remoteOperation",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
