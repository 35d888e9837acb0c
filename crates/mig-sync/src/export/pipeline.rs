use crate::run_dir::ASSETS_DIR;
use crate::{
    ExportSettings, ExportSummary, MigrateError, MigrateRoot, Phase, Prompter,
    Result as MigrateResult, ResumeAction, RunDir, checkpoint, resume,
};

use std::path::{Component, Path};
use std::sync::Arc;

use log::{error, info, warn};
use mig_core::{Course, ExportManifest, RecordId, Role, SuperUser, Tenant, UnitError};
use mig_legacy::{
    ExportOptions, LegacyAsset, LegacyContentSource, LegacyInstallation, LegacyStore,
    LegacyTenant,
};

/// Phase one: legacy store and legacy server to export manifest and archives.
pub struct ExportPipeline {
    store: Box<dyn LegacyStore>,
    source: Box<dyn LegacyContentSource>,
    installation: LegacyInstallation,
    prompter: Arc<dyn Prompter>,
    settings: ExportSettings,
}

impl ExportPipeline {
    pub fn new(
        store: Box<dyn LegacyStore>,
        source: Box<dyn LegacyContentSource>,
        installation: LegacyInstallation,
        prompter: Arc<dyn Prompter>,
        settings: ExportSettings,
    ) -> Self {
        Self {
            store,
            source,
            installation,
            prompter,
            settings,
        }
    }

    pub async fn run(mut self) -> MigrateResult<ExportSummary> {
        let root = self.settings.migrate_root.clone();
        let (run, mut manifest) = self.open_run(&root).await?;
        let manifest_path = run.export_manifest_path();
        info!("Export run {} at {}", run.id, run.path.display());

        let tenants = self.store.tenants().await?;
        let actor = self.resolve_super_user(&manifest, tenants)?;
        checkpoint::save(&manifest_path, &manifest).await?;

        if self.settings.skip_courses {
            info!("Skipping course export");
        } else {
            let result = self.export_courses(&run, &mut manifest, actor).await;
            if let Err(e) = self.source.stop().await {
                warn!("Failed to stop legacy server: {e}");
            }
            result?;
        }

        manifest.status.dedupe();
        checkpoint::save(&manifest_path, &manifest).await?;

        let progress = manifest.progress();
        Ok(ExportSummary {
            success: manifest.status.success.len(),
            error: manifest.status.error.len(),
            pending: progress.total.saturating_sub(progress.completed),
            rejected_users: manifest.rejected_users.len(),
            manifest_path,
        })
    }

    /// Resume the newest exported run or start a new one.
    async fn open_run(&self, root: &MigrateRoot) -> MigrateResult<(RunDir, ExportManifest)> {
        if let Some(run) = root.exported_runs().await?.pop()
            && let Some(existing) =
                checkpoint::load::<ExportManifest>(&run.export_manifest_path()).await?
        {
            let action =
                resume::choose_action(self.prompter.as_ref(), Phase::Export, existing.progress())
                    .await?;
            return match action {
                ResumeAction::Continue => Ok((run, existing)),
                ResumeAction::Restart => {
                    info!("Existing export data will be cleared");
                    let force_rebuild = self
                        .settings
                        .force_rebuild
                        .unwrap_or(existing.force_rebuild);
                    let manifest = self.extract(Self::fresh_manifest(force_rebuild)).await?;
                    Ok((run, manifest))
                }
                ResumeAction::Exit => Err(MigrateError::cancelled()),
            };
        }

        let force_rebuild = match self.settings.force_rebuild {
            Some(force_rebuild) => force_rebuild,
            None => {
                self.prompter
                    .confirm("Whether a full rebuild should be forced", false)
                    .await?
            }
        };
        let run = root.create_run().await?;
        let manifest = self.extract(Self::fresh_manifest(force_rebuild)).await?;
        Ok((run, manifest))
    }

    fn fresh_manifest(force_rebuild: bool) -> ExportManifest {
        ExportManifest::new(chrono::Utc::now().to_rfc3339(), force_rebuild)
    }

    /// Read roles, users and the course catalogue into `manifest`.
    async fn extract(&self, mut manifest: ExportManifest) -> MigrateResult<ExportManifest> {
        let roles: Vec<Role> = self
            .store
            .roles()
            .await?
            .into_iter()
            .map(Role::from)
            .collect();
        info!("Exported {} roles", roles.len());

        for user in self.store.users().await? {
            let id = user.id.clone();
            match user.resolve(&roles) {
                Ok(user) => manifest.users.push(user),
                Err(e) => {
                    let e = MigrateError::from(e);
                    warn!("Rejected user {id}: {e}");
                    manifest
                        .rejected_users
                        .push(UnitError::new(id, e.kind(), e.to_string()));
                }
            }
        }
        info!(
            "Exported {} users ({} rejected)",
            manifest.users.len(),
            manifest.rejected_users.len()
        );

        for document in self.store.courses().await? {
            match Course::from_document(&document) {
                Ok(course) => manifest.courses.push(course),
                Err(e) => warn!("Skipping malformed course document: {e}"),
            }
        }
        info!("Found {} courses", manifest.courses.len());

        manifest.roles = roles;
        Ok(manifest)
    }

    fn resolve_super_user(
        &self,
        manifest: &ExportManifest,
        tenants: Vec<LegacyTenant>,
    ) -> MigrateResult<SuperUser> {
        let role = &self.settings.super_admin_role;
        let user = manifest.find_user_with_role(role).ok_or_else(|| {
            MigrateError::configuration(format!(
                "Could not determine super user: no user has role '{role}'"
            ))
        })?;

        let tenant = user.tenant_id.as_ref().and_then(|tenant_id| {
            tenants
                .into_iter()
                .find(|tenant| &tenant.id == tenant_id)
                .map(Tenant::from)
        });

        Ok(SuperUser {
            user: user.clone(),
            tenant,
        })
    }

    async fn export_courses(
        &mut self,
        run: &RunDir,
        manifest: &mut ExportManifest,
        actor: SuperUser,
    ) -> MigrateResult<()> {
        info!("Starting legacy app");
        self.source.start().await?;
        self.source.await_ready().await?;
        self.source.set_actor(actor);

        let options = ExportOptions {
            force_rebuild: manifest.force_rebuild,
        };
        let pending: Vec<RecordId> = manifest
            .course_ids()
            .filter(|id| !manifest.status.is_success(id))
            .cloned()
            .collect();
        info!("Attempting to export {} course(s)", pending.len());

        let mut attempted = 0;
        for id in pending {
            if let Some(limit) = self.settings.limit
                && attempted >= limit
            {
                info!("Export limit of {limit} reached");
                break;
            }
            attempted += 1;

            match self.export_course(run, manifest, &id, options).await {
                Ok(()) => {
                    info!("  Exported {id}");
                    manifest.status.record_success(id);
                }
                Err(e) => {
                    error!("  Export of {id} failed: {e}");
                    manifest
                        .status
                        .record_error(UnitError::new(id, e.kind(), e.to_string()));
                }
            }

            checkpoint::save(&run.export_manifest_path(), manifest).await?;
        }

        if !manifest.status.error.is_empty() {
            warn!(
                "{} course(s) failed to export",
                manifest.status.error.len()
            );
        }
        Ok(())
    }

    async fn export_course(
        &mut self,
        run: &RunDir,
        manifest: &mut ExportManifest,
        id: &RecordId,
        options: ExportOptions,
    ) -> MigrateResult<()> {
        let course = manifest
            .course(id)
            .ok_or_else(|| MigrateError::data_integrity(format!("course {id} not in catalogue")))?;
        info!("Exporting {} {}", id, course.title);
        let hero = course.hero_image.clone();

        let archive = self.source.export_unit(id, options).await?;
        move_file(&archive, &run.archive_path(id)).await?;

        let hero = match hero {
            Some(asset_id) if !is_copied_asset(&asset_id) => {
                Some(self.copy_hero(run, &asset_id).await?)
            }
            other => other,
        };

        if let Some(course) = manifest.course_mut(id) {
            course.relative_archive_path = Some(RunDir::relative_archive_path(id));
            course.hero_image = hero;
        }
        Ok(())
    }

    /// Copy a hero image asset into the run, returning its run-relative path
    async fn copy_hero(&self, run: &RunDir, asset_id: &str) -> MigrateResult<String> {
        let asset = self
            .store
            .asset(&RecordId::from(asset_id))
            .await?
            .ok_or_else(|| {
                MigrateError::data_integrity(format!("hero image asset {asset_id} not found"))
            })?;

        let relative = hero_copy_path(&asset)?;
        let source = self.installation.asset_path(&asset);
        let destination = run.path.join(&relative);
        if let Some(parent) = destination.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                MigrateError::storage(format!("failed to create {}: {e}", parent.display()))
            })?;
        }

        tokio::fs::copy(&source, &destination).await.map_err(|e| {
            MigrateError::storage(format!(
                "failed to copy hero image {}: {e}",
                source.display()
            ))
        })?;

        Ok(relative)
    }
}

/// Run-relative location of a copied hero asset, `assets/<asset id>/<file name>`.
/// Only the final component of the legacy file name is kept.
fn hero_copy_path(asset: &LegacyAsset) -> MigrateResult<String> {
    let file_name = Path::new(&asset.filename)
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            MigrateError::data_integrity(format!(
                "hero image asset {} has no usable file name '{}'",
                asset.id, asset.filename
            ))
        })?;

    let mut components = Path::new(asset.id.as_str()).components();
    let single_component = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single_component {
        return Err(MigrateError::data_integrity(format!(
            "hero image asset id '{}' is not a valid directory name",
            asset.id
        )));
    }

    Ok(format!("{ASSETS_DIR}/{}/{file_name}", asset.id))
}

fn is_copied_asset(hero: &str) -> bool {
    hero.strip_prefix(ASSETS_DIR)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// Rename, falling back to copy and remove across devices.
async fn move_file(from: &Path, to: &Path) -> MigrateResult<()> {
    if tokio::fs::rename(from, to).await.is_ok() {
        return Ok(());
    }

    tokio::fs::copy(from, to).await.map_err(|e| {
        MigrateError::storage(format!(
            "failed to move {} to {}: {e}",
            from.display(),
            to.display()
        ))
    })?;
    if let Err(e) = tokio::fs::remove_file(from).await {
        warn!("Failed to remove {}: {e}", from.display());
    }
    Ok(())
}
