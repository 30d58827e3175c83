use crate::core::path::mods_dir;
use crate::core::{SyncError, SyncResult};
use crate::di::ServiceContainer;
use crate::modrinth::types::PackageVersion;
use crate::package::cleaner::clean_mods_dir;
use crate::package::downloader::{DownloadCoordinator, DownloadTask};
use crate::package::extractor::PackageExtractor;
use crate::package::fetcher::VerifiedFetcher;
use crate::package::filter::ContentFilter;
use crate::package::manifest::{EntryKind, ManifestIndex, ARCHIVE_EXTENSION};
use crate::package::overrides::OverrideMerger;
use crate::package::state::{InstallState, StateStore};
use crate::sync::summary::{CheckReport, SyncOutcome, SyncSummary};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Which command is being run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    Install,
    /// Same behavior as `Install`
    Update,
    /// Full sync regardless of the installed marker
    ForceUpdate,
}

impl SyncMode {
    pub fn is_forced(self) -> bool {
        matches!(self, SyncMode::ForceUpdate)
    }
}

/// Manifest entries sorted into downloads and skips
#[derive(Debug, Clone, Default)]
pub struct DownloadPlan {
    pub tasks: Vec<DownloadTask>,
    pub client_skipped: usize,
    /// Entries outside `mods/`
    pub other_skipped: usize,
    /// Mods whose filename was already queued from another manifest path
    pub duplicate_skipped: usize,
    /// Mods with no download URL, reported as failures
    pub unfetchable: Vec<String>,
}

/// Drives install, update and check against one instance directory
pub struct SyncEngine {
    services: ServiceContainer,
    filter: ContentFilter,
    state: StateStore,
    fetcher: Arc<VerifiedFetcher>,
    workspace_root: Option<PathBuf>,
    show_progress: bool,
}

impl SyncEngine {
    pub fn new(services: ServiceContainer) -> Self {
        let filter = ContentFilter::from_config(services.config.as_ref());
        let state = StateStore::new(
            Arc::clone(&services.storage),
            services.config.instance_dir(),
        );
        let fetcher = Arc::new(VerifiedFetcher::new(
            Arc::clone(&services.fetcher),
            Arc::clone(&services.storage),
        ));

        Self {
            services,
            filter,
            state,
            fetcher,
            workspace_root: None,
            show_progress: false,
        }
    }

    /// Draw a progress bar during the download phase
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Create extraction workspaces under `root` instead of the system temp dir
    pub fn with_workspace_root(mut self, root: PathBuf) -> Self {
        self.workspace_root = Some(root);
        self
    }

    fn instance_dir(&self) -> &Path {
        self.services.config.instance_dir()
    }

    pub fn installed(&self) -> SyncResult<InstallState> {
        self.state.load()
    }

    /// Newest published version of the configured modpack
    pub async fn latest_version(&self) -> SyncResult<PackageVersion> {
        let project = self.services.config.modpack_id();
        self.services
            .registry
            .list_versions(project)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| SyncError::Registry("No versions found for modpack".to_string()))
    }

    /// Compare the installed marker with the latest version. Changes nothing.
    pub async fn check(&self) -> SyncResult<CheckReport> {
        let installed = self.installed()?;
        let latest = self.latest_version().await?;

        Ok(CheckReport {
            modpack_id: self.services.config.modpack_id().to_string(),
            installed: installed.version_id().map(str::to_string),
            latest_id: latest.id,
            latest_number: latest.version_number,
        })
    }

    pub async fn run(&self, mode: SyncMode) -> SyncResult<SyncOutcome> {
        self.install(mode.is_forced()).await
    }

    /// Bring the instance to the latest version.
    ///
    /// Without `force`, an instance whose marker already names the latest
    /// version is left untouched.
    pub async fn install(&self, force: bool) -> SyncResult<SyncOutcome> {
        let latest = self.latest_version().await?;
        let installed = self.installed()?;

        if !force && installed.version_id() == Some(latest.id.as_str()) {
            tracing::debug!(version = %latest.id, "installed version is current");
            return Ok(SyncOutcome::UpToDate {
                version_id: latest.id,
                version_number: latest.version_number,
            });
        }

        tracing::info!("Installing {}...", latest.version_number);
        let summary = self.full_sync(&latest).await?;
        Ok(SyncOutcome::Synced(summary))
    }

    async fn full_sync(&self, version: &PackageVersion) -> SyncResult<SyncSummary> {
        let storage = self.services.storage.as_ref();
        let instance_dir = self.instance_dir();

        let archive = version
            .find_file(ARCHIVE_EXTENSION)
            .ok_or_else(|| SyncError::MissingArchive(ARCHIVE_EXTENSION.to_string()))?;

        // Removed on drop, whichever way this function returns
        let workspace = self.create_workspace()?;

        let archive_name = Path::new(&archive.filename)
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "modpack.mrpack".into());
        let archive_path = workspace.path().join(archive_name);

        tracing::info!("Downloading {}...", archive.filename);
        self.fetcher
            .fetch_to(&archive.url, &archive_path, archive.size, &archive.hashes)
            .await
            .map_err(|e| {
                SyncError::Archive(format!("Failed to download {}: {}", archive.filename, e))
            })?;

        let extract_dir =
            PackageExtractor::new(workspace.path().join("extracted")).extract(&archive_path)?;
        let index = ManifestIndex::load(storage, &extract_dir)?;

        tracing::info!("Cleaning mods directory...");
        let mods_dir = mods_dir(instance_dir);
        storage.create_dir_all(&mods_dir)?;
        let cleaned = clean_mods_dir(storage, &mods_dir, &self.filter)?;

        tracing::info!("Processing modpack files...");
        let plan = self.plan_downloads(&index, &mods_dir);

        tracing::info!("Downloading {} mods...", plan.tasks.len());
        let coordinator = DownloadCoordinator::new(
            Arc::clone(&self.fetcher),
            Some(self.services.config.max_concurrent_downloads()),
        );
        let downloads = if self.show_progress {
            coordinator.run_with_progress(plan.tasks).await
        } else {
            coordinator.run(plan.tasks).await
        };

        let overrides =
            OverrideMerger::new(storage, &self.filter).merge(&extract_dir, instance_dir)?;

        self.fix_ownership(instance_dir);

        // Committed even when some files failed; the summary reports them
        self.state.commit(&version.id)?;
        self.fix_ownership(self.state.path());

        let failed = plan.unfetchable.len() + downloads.failed + overrides.failed.len();
        let mut failed_files = plan.unfetchable;
        failed_files.extend(downloads.failed_files);
        failed_files.extend(overrides.failed.iter().cloned());

        Ok(SyncSummary {
            version_id: version.id.clone(),
            version_number: version.version_number.clone(),
            downloaded: downloads.succeeded,
            override_mods: overrides.mods_copied,
            client_skipped: plan.client_skipped + overrides.mods_skipped,
            other_skipped: plan.other_skipped,
            duplicate_skipped: plan.duplicate_skipped,
            failed,
            failed_files,
            removed: cleaned.removed.len(),
            preserved: cleaned.preserved.len(),
        })
    }

    fn create_workspace(&self) -> SyncResult<tempfile::TempDir> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("packsync-");
        let workspace = match &self.workspace_root {
            Some(root) => {
                self.services.storage.create_dir_all(root)?;
                builder.tempdir_in(root)?
            }
            None => builder.tempdir()?,
        };
        Ok(workspace)
    }

    /// Sort manifest entries into download tasks and skips.
    ///
    /// Every entry lands in exactly one bucket, so the plan accounts for
    /// unvalidated indexes too.
    pub fn plan_downloads(&self, index: &ManifestIndex, mods_dir: &Path) -> DownloadPlan {
        let mut plan = DownloadPlan::default();
        let mut queued = HashSet::new();

        for entry in &index.files {
            let filename = match entry.classify() {
                EntryKind::Other => {
                    plan.other_skipped += 1;
                    continue;
                }
                EntryKind::Mod(filename) => filename,
            };

            if self
                .filter
                .is_client_only(filename, entry.server_requirement())
            {
                tracing::info!(file = %filename, "⊘ Skipping client mod");
                plan.client_skipped += 1;
                continue;
            }

            let Some(url) = entry.primary_url() else {
                tracing::warn!(path = %entry.path, "✗ no download URL");
                plan.unfetchable.push(filename.to_string());
                continue;
            };

            // Mods install flat; two entries sharing a filename would race on one path
            if !queued.insert(filename) {
                tracing::warn!(path = %entry.path, "duplicate mod filename; skipping");
                plan.duplicate_skipped += 1;
                continue;
            }
            plan.tasks.push(DownloadTask {
                url: url.to_string(),
                target: mods_dir.join(filename),
                expected_size: entry.file_size,
                hashes: entry.hashes.clone(),
            });
        }

        plan
    }

    /// Apply configured ownership; failures are warnings only
    fn fix_ownership(&self, path: &Path) {
        let config = self.services.config.as_ref();
        let Some(user) = config.permission_user() else {
            return;
        };

        tracing::info!(path = %path.display(), "Fixing permissions...");
        if let Err(e) =
            self.services
                .ownership
                .apply_ownership(path, user, config.permission_group())
        {
            tracing::warn!(error = %e, "⚠ Could not fix permissions");
        }
    }
}
