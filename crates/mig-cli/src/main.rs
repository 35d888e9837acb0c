use mig_cli::{Cli, TerminalPrompter, app, logger};

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{LevelFilter, error, info};
use mig_config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // --debug wins over the configured level
    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        *config.logging.level
    };
    if let Err(e) = logger::initialize(
        level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    ) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let prompter = Arc::new(TerminalPrompter::stdio());
    match app::run(&cli, &config, prompter).await {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) if e.is_cancelled() => {
            info!("Exiting at operator request");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> mig_cli::Result<Config> {
    let config = Config::load()?;
    config.validate()?;
    Ok(config)
}
