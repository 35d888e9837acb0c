use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Extract records and course archives from the legacy installation
    Export,
    /// Replay an export against the destination API
    Import,
}

#[derive(Debug, Parser)]
#[command(name = "course-migrate")]
#[command(about = "Two-phase, resumable course migration")]
#[command(version)]
pub struct Cli {
    pub action: Action,

    /// Log at debug level
    #[arg(long)]
    pub debug: bool,

    /// Maximum number of courses attempted by this run
    #[arg(long)]
    pub limit: Option<usize>,

    /// Root of the legacy installation (prompted for when omitted)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Destination API URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Destination auth token
    #[arg(long, env = "MIG_AUTH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Ask the legacy server to rebuild every course
    #[arg(long)]
    pub force_rebuild: bool,

    /// Export records only, skipping course archives
    #[arg(long)]
    pub no_courses: bool,
}
