//! Wiring from parsed arguments and configuration to a pipeline run.

use crate::{Action, Cli, Result as CliErrorResult};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::info;
use mig_config::Config;
use mig_legacy::{JsonDumpStore, LegacyInstallation, ProcessContentSource, ProcessSettings};
use mig_package::Packager;
use mig_sync::{ExportPipeline, ExportSettings, ImportPipeline, ImportSettings, Prompter};

const SOURCE_PROMPT: &str = "Path to the legacy installation";

/// Run the requested phase, returning its summary line
pub async fn run(cli: &Cli, config: &Config, prompter: Arc<dyn Prompter>) -> CliErrorResult<String> {
    let source = resolve_source(cli, prompter.as_ref()).await?;
    info!("Legacy installation: {}", source.display());

    match cli.action {
        Action::Export => export(cli, config, &source, prompter).await,
        Action::Import => import(cli, config, &source, prompter).await,
    }
}

/// `--source`, else ask with the working directory as default
pub async fn resolve_source(cli: &Cli, prompter: &dyn Prompter) -> CliErrorResult<PathBuf> {
    if let Some(ref source) = cli.source {
        return Ok(source.clone());
    }

    let cwd = std::env::current_dir()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|_| String::from("."));
    let answer = prompter.text(SOURCE_PROMPT, Some(&cwd)).await?;
    Ok(PathBuf::from(answer))
}

pub fn export_settings(cli: &Cli, config: &Config, source: &Path) -> ExportSettings {
    ExportSettings {
        limit: cli.limit,
        force_rebuild: cli.force_rebuild.then_some(true),
        skip_courses: cli.no_courses,
        ..ExportSettings::new(config, source)
    }
}

/// Command-line credentials win over configured ones
pub fn import_settings(cli: &Cli, config: &Config, source: &Path) -> ImportSettings {
    let mut settings = ImportSettings::new(config, source);
    settings.limit = cli.limit;
    if let Some(ref api_url) = cli.api_url {
        settings.api_url = Some(api_url.clone());
    }
    if let Some(ref token) = cli.token {
        settings.auth_token = Some(token.clone());
    }
    settings
}

async fn export(
    cli: &Cli,
    config: &Config,
    source: &Path,
    prompter: Arc<dyn Prompter>,
) -> CliErrorResult<String> {
    let installation = LegacyInstallation::load(source).await?;
    let store = JsonDumpStore::new(config.store_dir(source));
    let content =
        ProcessContentSource::new(installation.clone(), ProcessSettings::from(&config.legacy))?;

    let summary = ExportPipeline::new(
        Box::new(store),
        Box::new(content),
        installation,
        prompter,
        export_settings(cli, config, source),
    )
    .run()
    .await?;

    Ok(summary.to_string())
}

async fn import(
    cli: &Cli,
    config: &Config,
    source: &Path,
    prompter: Arc<dyn Prompter>,
) -> CliErrorResult<String> {
    let summary = ImportPipeline::new(
        prompter,
        Packager::from(&config.package),
        import_settings(cli, config, source),
    )
    .run()
    .await?;

    Ok(summary.to_string())
}
