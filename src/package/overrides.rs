//! Copies a package's override trees onto the instance directory.

use crate::core::path::MODS_DIR;
use crate::core::SyncResult;
use crate::di::Storage;
use crate::package::cleaner::is_jar;
use crate::package::filter::ContentFilter;
use std::path::Path;

/// Override roots in application order; later roots overwrite earlier ones
pub const OVERRIDE_ROOTS: [&str; 2] = ["overrides", "server-overrides"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideReport {
    /// Jars copied into the mods directory
    pub mods_copied: usize,
    /// Client-only jars skipped
    pub mods_skipped: usize,
    /// Entries that failed to copy
    pub failed: Vec<String>,
}

/// Merges `overrides/` and `server-overrides/` from an extracted archive
pub struct OverrideMerger<'a> {
    storage: &'a dyn Storage,
    filter: &'a ContentFilter,
}

impl<'a> OverrideMerger<'a> {
    pub fn new(storage: &'a dyn Storage, filter: &'a ContentFilter) -> Self {
        Self { storage, filter }
    }

    /// Apply every override root present under `extract_dir` onto `instance_dir`.
    ///
    /// A failed copy is logged and recorded; it does not stop the merge.
    pub fn merge(&self, extract_dir: &Path, instance_dir: &Path) -> SyncResult<OverrideReport> {
        let mut report = OverrideReport::default();

        for root in OVERRIDE_ROOTS {
            let source = extract_dir.join(root);
            if !self.storage.is_dir(&source) {
                continue;
            }
            tracing::debug!(root, "applying override tree");
            self.merge_mods(&source.join(MODS_DIR), &instance_dir.join(MODS_DIR), &mut report)?;
            self.merge_entries(&source, instance_dir, &mut report)?;
        }

        Ok(report)
    }

    /// Flat-copy surviving jars into the mods directory
    fn merge_mods(
        &self,
        source_mods: &Path,
        target_mods: &Path,
        report: &mut OverrideReport,
    ) -> SyncResult<()> {
        if !self.storage.is_dir(source_mods) {
            return Ok(());
        }

        for path in self.storage.list_dir(source_mods)? {
            if !self.storage.is_file(&path) || !is_jar(&path) {
                continue;
            }
            let Some(name) = path.file_name().map(|n| n.to_string_lossy().to_string()) else {
                continue;
            };

            if self.filter.is_client_only(&name, None) {
                tracing::info!(file = %name, "⊘ skipping override client mod");
                report.mods_skipped += 1;
                continue;
            }

            match self.storage.copy_file(&path, &target_mods.join(&name)) {
                Ok(()) => {
                    tracing::info!(file = %name, "✓ override");
                    report.mods_copied += 1;
                }
                Err(e) => {
                    tracing::warn!(file = %name, error = %e, "✗ override copy failed");
                    report.failed.push(name);
                }
            }
        }

        Ok(())
    }

    /// Copy every other top-level entry, replacing directories wholesale
    fn merge_entries(
        &self,
        source: &Path,
        instance_dir: &Path,
        report: &mut OverrideReport,
    ) -> SyncResult<()> {
        for path in self.storage.list_dir(source)? {
            let Some(name) = path.file_name().map(|n| n.to_string_lossy().to_string()) else {
                continue;
            };
            if name == MODS_DIR {
                continue;
            }

            let dest = instance_dir.join(&name);
            let (label, result) = if self.storage.is_dir(&path) {
                (format!("{}/", name), self.replace_dir(&path, &dest))
            } else {
                (name, self.storage.copy_file(&path, &dest))
            };

            match result {
                Ok(()) => {
                    tracing::info!(entry = %label, "✓ override");
                }
                Err(e) => {
                    tracing::warn!(entry = %label, error = %e, "✗ override copy failed");
                    report.failed.push(label);
                }
            }
        }

        Ok(())
    }

    fn replace_dir(&self, source: &Path, dest: &Path) -> SyncResult<()> {
        if self.storage.is_dir(dest) {
            self.storage.remove_dir_all(dest)?;
        } else if self.storage.exists(dest) {
            self.storage.remove_file(dest)?;
        }
        self.storage.copy_tree(source, dest)
    }
}
