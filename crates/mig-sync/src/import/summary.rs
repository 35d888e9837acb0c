use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub success: usize,
    pub error: usize,
    pub skip: usize,
    pub user_failures: usize,
    pub manifest_path: PathBuf,
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} course(s) imported, {} failed, {} skipped, {} user(s) failed. Details: {}",
            self.success,
            self.error,
            self.skip,
            self.user_failures,
            self.manifest_path.display()
        )
    }
}
