use std::fmt;

/// Counts reported at the end of a full sync
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub version_id: String,
    pub version_number: String,
    /// Mods downloaded from the manifest
    pub downloaded: usize,
    /// Mods copied from override trees
    pub override_mods: usize,
    /// Client-only mods skipped, from the manifest and from overrides
    pub client_skipped: usize,
    /// Manifest entries outside `mods/`
    pub other_skipped: usize,
    /// Mods dropped because another manifest path had the same filename
    pub duplicate_skipped: usize,
    /// Downloads and override copies that failed, plus mods with no URL
    pub failed: usize,
    pub failed_files: Vec<String>,
    /// Jars removed during cleanup
    pub removed: usize,
    /// Jars kept during cleanup
    pub preserved: usize,
}

impl fmt::Display for SyncSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(50);
        writeln!(f, "{}", rule)?;
        writeln!(f, "Installation complete: {}", self.version_number)?;
        writeln!(f, "  Downloaded: {} mods", self.downloaded)?;
        writeln!(f, "  From overrides: {} mods", self.override_mods)?;
        writeln!(f, "  Skipped (client-only): {}", self.client_skipped)?;
        writeln!(f, "  Skipped (other): {}", self.other_skipped)?;
        if self.duplicate_skipped > 0 {
            writeln!(f, "  Skipped (duplicate): {}", self.duplicate_skipped)?;
        }
        if self.failed > 0 {
            writeln!(f, "  Failed: {} ({})", self.failed, self.failed_files.join(", "))?;
        }
        write!(f, "{}", rule)
    }
}

/// Result of `install`, `update` or `force-update`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The installed marker already matches the latest version
    UpToDate {
        version_id: String,
        version_number: String,
    },
    /// A full sync ran and the marker was committed
    Synced(SyncSummary),
}

impl fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncOutcome::UpToDate { version_number, .. } => {
                writeln!(f, "✓ Already installed: {}", version_number)?;
                write!(f, "  Use 'force-update' to reinstall")
            }
            SyncOutcome::Synced(summary) => write!(f, "{}", summary),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionStatus {
    UpToDate,
    UpdateAvailable,
    NotInstalled,
}

/// Installed vs latest comparison produced by `check`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub modpack_id: String,
    pub installed: Option<String>,
    pub latest_id: String,
    pub latest_number: String,
}

impl CheckReport {
    pub fn status(&self) -> VersionStatus {
        match &self.installed {
            None => VersionStatus::NotInstalled,
            Some(id) if *id == self.latest_id => VersionStatus::UpToDate,
            Some(_) => VersionStatus::UpdateAvailable,
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Modpack: {}", self.modpack_id)?;
        writeln!(
            f,
            "Installed: {}",
            self.installed.as_deref().unwrap_or("Not installed")
        )?;
        writeln!(f, "Latest: {} ({})", self.latest_number, self.latest_id)?;
        match self.status() {
            VersionStatus::UpToDate => write!(f, "✓ Up to date!"),
            VersionStatus::UpdateAvailable => write!(f, "↑ Update available"),
            VersionStatus::NotInstalled => write!(f, "→ Run 'install' to install"),
        }
    }
}
