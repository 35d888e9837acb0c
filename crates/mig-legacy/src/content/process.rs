//! Legacy server run as a child process and driven over HTTP.

use crate::{
    ExportOptions, LegacyContentSource, LegacyError, LegacyInstallation,
    Result as LegacyErrorResult,
};

use std::panic::Location;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, info, warn};
use mig_config::LegacyConfig;
use mig_core::{RecordId, SuperUser};
use serde::Serialize;
use tokio::process::{Child, Command};
use tokio::time::{Instant, sleep};

const ACTOR_HEADER: &str = "X-Migrate-Actor";
const DEFAULT_POLL_INTERVAL_MS: u64 = 500;
const PROBE_TIMEOUT_MS: u64 = 1000;
const STOP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct ProcessSettings {
    /// Command starting the server; `None` attaches to an already running one
    pub command: Option<String>,
    pub args: Vec<String>,
    pub ready_url: String,
    pub export_url: String,
    pub startup_timeout: Duration,
    pub poll_interval: Duration,
}

impl From<&LegacyConfig> for ProcessSettings {
    fn from(config: &LegacyConfig) -> Self {
        Self {
            command: config.server_command.clone(),
            args: config.server_args.clone(),
            ready_url: config.ready_url.clone(),
            export_url: config.export_url.clone(),
            startup_timeout: Duration::from_secs(config.startup_timeout_secs),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportRequest<'a> {
    #[serde(flatten)]
    options: ExportOptions,
    actor: &'a SuperUser,
}

/// Legacy content source that spawns the legacy server, waits for its ready
/// URL and triggers exports through its export endpoint.
pub struct ProcessContentSource {
    installation: LegacyInstallation,
    settings: ProcessSettings,
    http: reqwest::Client,
    child: Option<Child>,
    actor: Option<SuperUser>,
}

impl ProcessContentSource {
    pub fn new(
        installation: LegacyInstallation,
        settings: ProcessSettings,
    ) -> LegacyErrorResult<Self> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            installation,
            settings,
            http,
            child: None,
            actor: None,
        })
    }

    fn export_url(&self, course_id: &RecordId) -> String {
        format!(
            "{}/{}",
            self.settings.export_url.trim_end_matches('/'),
            course_id
        )
    }

    /// Fail fast when the spawned server has already exited
    fn check_child(&mut self) -> LegacyErrorResult<()> {
        if let Some(child) = self.child.as_mut()
            && let Ok(Some(status)) = child.try_wait()
        {
            self.child = None;
            return Err(LegacyError::ProcessExited {
                status: status.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    async fn probe(&self) -> bool {
        match self
            .http
            .get(&self.settings.ready_url)
            .timeout(Duration::from_millis(PROBE_TIMEOUT_MS))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Legacy server not ready yet: {e}");
                false
            }
        }
    }
}

#[async_trait]
impl LegacyContentSource for ProcessContentSource {
    async fn start(&mut self) -> LegacyErrorResult<()> {
        let Some(ref command) = self.settings.command else {
            info!(
                "No legacy server command configured, expecting a server at {}",
                self.settings.ready_url
            );
            return Ok(());
        };

        if self.child.is_some() {
            return Ok(());
        }

        info!(
            "Starting legacy server '{}' in {}",
            command,
            self.installation.root.display()
        );

        let child = Command::new(command)
            .args(&self.settings.args)
            .current_dir(&self.installation.root)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| LegacyError::ProcessSpawn {
                command: command.clone(),
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("Spawned legacy server with PID: {:?}", child.id());
        self.child = Some(child);
        Ok(())
    }

    async fn await_ready(&mut self) -> LegacyErrorResult<()> {
        let timeout = self.settings.startup_timeout;
        let start = Instant::now();

        while start.elapsed() < timeout {
            self.check_child()?;

            if self.probe().await {
                info!("Legacy server readiness check passed");
                return Ok(());
            }

            sleep(self.settings.poll_interval).await;
        }

        warn!(
            "Legacy server readiness check timed out after {}s",
            timeout.as_secs()
        );
        Err(LegacyError::StartupTimeout {
            timeout_secs: timeout.as_secs(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    fn set_actor(&mut self, actor: SuperUser) {
        info!("Exporting as {}", actor.user.email);
        self.actor = Some(actor);
    }

    async fn export_unit(
        &mut self,
        course_id: &RecordId,
        options: ExportOptions,
    ) -> LegacyErrorResult<PathBuf> {
        let actor = self.actor.as_ref().ok_or_else(|| LegacyError::NoActor {
            location: ErrorLocation::from(Location::caller()),
        })?;

        let response = self
            .http
            .post(self.export_url(course_id))
            .header(ACTOR_HEADER, actor.user.id.as_str())
            .json(&ExportRequest { options, actor })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = if body.trim().is_empty() {
                status.to_string()
            } else {
                format!("{status}: {}", body.trim())
            };
            return Err(LegacyError::export(course_id, detail));
        }

        let archive = self.installation.export_archive(&actor.user.id);
        match tokio::fs::try_exists(&archive).await {
            Ok(true) => Ok(archive),
            Ok(false) => Err(LegacyError::export(
                course_id,
                format!("no archive produced at {}", archive.display()),
            )),
            Err(e) => Err(LegacyError::io(archive, e)),
        }
    }

    async fn stop(&mut self) -> LegacyErrorResult<()> {
        let Some(mut child) = self.child.take() else {
            return Ok(());
        };

        info!("Stopping legacy server");
        if let Err(e) = child.start_kill() {
            warn!("Failed to signal legacy server: {e}");
        }

        match tokio::time::timeout(Duration::from_secs(STOP_TIMEOUT_SECS), child.wait()).await {
            Ok(Ok(status)) => {
                debug!("Legacy server exited with {status}");
                Ok(())
            }
            Ok(Err(e)) => Err(LegacyError::io(&self.installation.root, e)),
            Err(_) => {
                warn!("Legacy server did not exit within {STOP_TIMEOUT_SECS}s");
                Ok(())
            }
        }
    }
}
