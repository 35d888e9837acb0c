use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub success: usize,
    pub error: usize,
    /// Courses not yet attempted, e.g. beyond `--limit`
    pub pending: usize,
    pub rejected_users: usize,
    pub manifest_path: PathBuf,
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} course(s) exported, {} failed, {} pending, {} user(s) rejected. Details: {}",
            self.success,
            self.error,
            self.pending,
            self.rejected_users,
            self.manifest_path.display()
        )
    }
}
