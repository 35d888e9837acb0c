use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    /// Rebuild the course output instead of reusing a cached build
    pub force_rebuild: bool,
}
