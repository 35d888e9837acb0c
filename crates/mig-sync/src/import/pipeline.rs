use crate::import::records::{course_patch, new_user};
use crate::{
    ImportSettings, ImportSummary, MigrateError, Phase, Prompter,
    Result as MigrateResult, ResumeAction, RunDir, checkpoint, resume,
};

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use futures::StreamExt;
use log::{debug, error, info, warn};
use mig_client::Client;
use mig_core::{EmailIndex, ExportManifest, IdMaps, ImportManifest, RecordId, UnitError};
use mig_package::Packager;

const API_URL_PROMPT: &str = "URL to the API";
const AUTH_TOKEN_PROMPT: &str = "An auth token is required to import the data, please enter it now";

/// Phase two: replay an export run against the destination API.
pub struct ImportPipeline {
    prompter: Arc<dyn Prompter>,
    packager: Packager,
    settings: ImportSettings,
}

impl ImportPipeline {
    pub fn new(prompter: Arc<dyn Prompter>, packager: Packager, settings: ImportSettings) -> Self {
        Self {
            prompter,
            packager,
            settings,
        }
    }

    pub async fn run(self) -> MigrateResult<ImportSummary> {
        let runs = self.settings.migrate_root.exported_runs().await?;
        let run = resume::choose_run(self.prompter.as_ref(), runs).await?;
        info!("Importing run {} from {}", run.id, run.path.display());

        let export = checkpoint::load::<ExportManifest>(&run.export_manifest_path())
            .await?
            .ok_or_else(|| {
                MigrateError::configuration(format!(
                    "No export data found in {}",
                    run.path.display()
                ))
            })?;

        let manifest_path = run.import_manifest_path();
        let mut manifest = self.open_manifest(&manifest_path, &export).await?;

        self.capture_credentials(&mut manifest).await?;
        checkpoint::save(&manifest_path, &manifest).await?;

        let client = self.connect(&manifest)?;
        client.check_auth().await?;
        info!("Authenticated against {}", client.base_url);

        if manifest.maps.roles_reconciled() {
            info!("Reusing role mapping from previous run");
        } else {
            let role_ids = self.reconcile_roles(&client, &export).await?;
            manifest.maps.set_role_ids(role_ids);
            checkpoint::save(&manifest_path, &manifest).await?;
        }

        self.sync_users(&client, &export, &mut manifest, &manifest_path)
            .await?;
        self.sync_courses(&client, &run, &export, &mut manifest, &manifest_path)
            .await?;

        Ok(ImportSummary {
            success: manifest.status.success.len(),
            error: manifest.status.error.len(),
            skip: manifest.status.skip.len(),
            user_failures: manifest.user_failures.len(),
            manifest_path,
        })
    }

    async fn open_manifest(
        &self,
        path: &Path,
        export: &ExportManifest,
    ) -> MigrateResult<ImportManifest> {
        let Some(mut manifest) = checkpoint::load::<ImportManifest>(path).await? else {
            return Ok(ImportManifest::default());
        };

        let action =
            resume::choose_action(self.prompter.as_ref(), Phase::Import, manifest.progress(export))
                .await?;
        match action {
            ResumeAction::Continue => Ok(manifest),
            ResumeAction::Restart => {
                info!("Existing import data will be cleared");
                manifest.restart();
                Ok(manifest)
            }
            ResumeAction::Exit => Err(MigrateError::cancelled()),
        }
    }

    /// Settings first, then the persisted manifest, then the operator.
    async fn capture_credentials(&self, manifest: &mut ImportManifest) -> MigrateResult<()> {
        let api_url = match self
            .settings
            .api_url
            .clone()
            .or_else(|| manifest.api_url.clone())
        {
            Some(api_url) => api_url,
            None => self.prompter.text(API_URL_PROMPT, None).await?,
        };
        let api_url = api_url.trim();
        if api_url.is_empty() {
            return Err(MigrateError::configuration("An API URL is required"));
        }

        let auth_token = match self
            .settings
            .auth_token
            .clone()
            .or_else(|| manifest.auth_token.clone())
        {
            Some(auth_token) => auth_token,
            None => self.prompter.text(AUTH_TOKEN_PROMPT, None).await?,
        };
        let auth_token = auth_token.trim();
        if auth_token.is_empty() {
            return Err(MigrateError::configuration("An auth token is required"));
        }

        manifest.api_url = Some(api_url.to_string());
        manifest.auth_token = Some(auth_token.to_string());
        Ok(())
    }

    fn connect(&self, manifest: &ImportManifest) -> MigrateResult<Client> {
        let (Some(api_url), Some(auth_token)) = (&manifest.api_url, &manifest.auth_token) else {
            return Err(MigrateError::configuration(
                "Destination credentials were not captured",
            ));
        };
        Ok(Client::new(
            api_url,
            auth_token,
            self.settings.client.clone(),
        )?)
    }

    /// Ask the operator for a destination role once per distinct source role
    /// name. Every source role id with that name maps to the choice.
    async fn reconcile_roles(
        &self,
        client: &Client,
        export: &ExportManifest,
    ) -> MigrateResult<BTreeMap<RecordId, String>> {
        let destination = client.list_roles().await?;
        if destination.is_empty() {
            return Err(MigrateError::configuration(
                "The destination has no roles to map users onto",
            ));
        }

        let choices: Vec<String> = destination
            .iter()
            .map(|role| role.display_name.clone())
            .collect();

        let mut chosen_by_name: BTreeMap<&str, String> = BTreeMap::new();
        let mut role_ids = BTreeMap::new();
        for role in &export.roles {
            if let Some(destination_id) = chosen_by_name.get(role.name.as_str()) {
                role_ids.insert(role.id.clone(), destination_id.clone());
                continue;
            }
            let default = self.settings.role_hints.suggest(
                &role.name,
                destination.iter().map(|role| role.short_name.as_str()),
            );
            let index = self
                .prompter
                .select(
                    &format!("Choose a new role for all '{}' users", role.name),
                    &choices,
                    default,
                )
                .await?;
            let chosen = destination.get(index).ok_or_else(|| {
                MigrateError::configuration(format!("invalid role choice {index}"))
            })?;
            debug!("Role {} -> {}", role.name, chosen.display_name);
            chosen_by_name.insert(role.name.as_str(), chosen.id.clone());
            role_ids.insert(role.id.clone(), chosen.id.clone());
        }

        Ok(role_ids)
    }

    async fn sync_users(
        &self,
        client: &Client,
        export: &ExportManifest,
        manifest: &mut ImportManifest,
        manifest_path: &Path,
    ) -> MigrateResult<()> {
        let existing = client.list_users().await?;
        let index = EmailIndex::new(
            existing
                .iter()
                .map(|user| (user.email.as_str(), user.id.as_str())),
        );
        info!("Destination has {} user(s)", existing.len());

        manifest.user_failures.clear();
        let mut pending = Vec::new();
        // Source users queued for creation, by email
        let mut queued = EmailIndex::default();
        let mut duplicates: Vec<(RecordId, RecordId)> = Vec::new();
        for user in &export.users {
            if manifest.maps.has_user(&user.id) {
                continue;
            }
            if let Some(destination_id) = index.find(&user.email) {
                debug!("User {} already exists as {destination_id}", user.email);
                manifest.maps.record_user(user.id.clone(), destination_id);
                continue;
            }
            if let Some(first) = queued.find(&user.email) {
                debug!("User {} shares email {} with {first}", user.id, user.email);
                duplicates.push((user.id.clone(), RecordId::from(first)));
                continue;
            }
            match new_user(user, &manifest.maps) {
                Ok(body) => {
                    queued.insert(&user.email, user.id.as_str());
                    pending.push((user.id.clone(), body));
                }
                Err(e) => {
                    let e = MigrateError::from(e);
                    warn!("Cannot create user {}: {e}", user.email);
                    manifest
                        .user_failures
                        .push(UnitError::new(user.id.clone(), e.kind(), e.to_string()));
                }
            }
        }
        checkpoint::save(manifest_path, manifest).await?;

        info!("Creating {} user(s)", pending.len());
        let mut created = futures::stream::iter(pending)
            .map(|(id, body)| async move {
                let result = client.create_user(&body).await;
                (id, body.email, result)
            })
            .buffer_unordered(self.settings.user_concurrency.max(1));

        while let Some((id, email, result)) = created.next().await {
            match result {
                Ok(user) => {
                    debug!("Created user {email} as {}", user.id);
                    manifest.maps.record_user(id, user.id);
                }
                Err(e) => {
                    let e = MigrateError::from(e);
                    error!("Failed to create user {email}: {e}");
                    manifest
                        .user_failures
                        .push(UnitError::new(id, e.kind(), e.to_string()));
                }
            }
            checkpoint::save(manifest_path, manifest).await?;
        }

        if !duplicates.is_empty() {
            resolve_duplicates(manifest, duplicates);
            checkpoint::save(manifest_path, manifest).await?;
        }

        if !manifest.user_failures.is_empty() {
            warn!("{} user(s) could not be created", manifest.user_failures.len());
        }
        Ok(())
    }

    async fn sync_courses(
        &self,
        client: &Client,
        run: &RunDir,
        export: &ExportManifest,
        manifest: &mut ImportManifest,
        manifest_path: &Path,
    ) -> MigrateResult<()> {
        let course_ids = export.exported_course_ids();
        let existing_titles: HashSet<String> = if course_ids
            .iter()
            .any(|id| !manifest.status.has_status(id))
        {
            client
                .list_courses()
                .await?
                .into_iter()
                .map(|course| course.title)
                .filter(|title| !title.is_empty())
                .collect()
        } else {
            HashSet::new()
        };

        info!("Importing {} course(s)", course_ids.len());
        let mut attempted = 0;
        for id in course_ids {
            if manifest.status.is_done(id) {
                manifest.status.record_skip(id.clone());
                checkpoint::save(manifest_path, manifest).await?;
                continue;
            }

            if !manifest.status.has_status(id)
                && let Some(course) = export.course(id)
                && existing_titles.contains(&course.title)
            {
                info!("  '{}' already exists at the destination, skipping", course.title);
                manifest.status.record_skip(id.clone());
                checkpoint::save(manifest_path, manifest).await?;
                continue;
            }

            if let Some(limit) = self.settings.limit
                && attempted >= limit
            {
                info!("Import limit of {limit} reached");
                break;
            }
            attempted += 1;

            match self.import_course(client, run, export, &manifest.maps, id).await {
                Ok(()) => {
                    info!("  Imported {id}");
                    manifest.status.record_success(id.clone());
                }
                Err(e) => {
                    error!("  Import of {id} failed: {e}");
                    manifest
                        .status
                        .record_error(UnitError::new(id.clone(), e.kind(), e.to_string()));
                }
            }
            checkpoint::save(manifest_path, manifest).await?;
        }

        manifest.status.dedupe();
        checkpoint::save(manifest_path, manifest).await
    }

    async fn import_course(
        &self,
        client: &Client,
        run: &RunDir,
        export: &ExportManifest,
        maps: &IdMaps,
        id: &RecordId,
    ) -> MigrateResult<()> {
        let course = export.course(id).ok_or_else(|| {
            MigrateError::data_integrity(format!("course {id} missing from export data"))
        })?;
        info!("Importing {} {}", id, course.title);

        let patch = course_patch(course, maps)?;
        let archive = run.path.join(
            course
                .relative_archive_path
                .clone()
                .unwrap_or_else(|| RunDir::relative_archive_path(id)),
        );

        let unpacked = self
            .packager
            .package(&archive, &run.path, id, &patch)
            .await?;
        client
            .import_course(&unpacked.to_string_lossy())
            .await?;

        if !self.settings.keep_unpacked
            && let Err(e) = Packager::discard(&unpacked).await
        {
            warn!("Failed to remove {}: {e}", unpacked.display());
        }
        Ok(())
    }
}

/// Point users sharing an email at the account created for the first of them.
/// A duplicate of a failed creation fails the same way.
fn resolve_duplicates(manifest: &mut ImportManifest, duplicates: Vec<(RecordId, RecordId)>) {
    for (duplicate, first) in duplicates {
        if let Ok(destination_id) = manifest.maps.user_id(&first).map(str::to_string) {
            manifest.maps.record_user(duplicate, destination_id);
            continue;
        }

        let failure = manifest
            .user_failures
            .iter()
            .find(|failure| failure.id == first)
            .map(|failure| UnitError::new(duplicate.clone(), failure.kind, failure.error.clone()));
        if let Some(failure) = failure {
            manifest.user_failures.push(failure);
        }
    }
}
