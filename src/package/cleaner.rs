use crate::core::SyncResult;
use crate::di::Storage;
use crate::package::filter::ContentFilter;
use std::path::Path;

/// What a mods-directory cleanup did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub removed: Vec<String>,
    pub preserved: Vec<String>,
}

/// Remove every `.jar` directly inside `mods_dir` unless it matches a preserved pattern.
///
/// Subdirectories, including `user/`, and non-jar files are left alone.
pub fn clean_mods_dir(
    storage: &dyn Storage,
    mods_dir: &Path,
    filter: &ContentFilter,
) -> SyncResult<CleanReport> {
    let mut report = CleanReport::default();

    if !storage.is_dir(mods_dir) {
        return Ok(report);
    }

    for path in storage.list_dir(mods_dir)? {
        if !storage.is_file(&path) || !is_jar(&path) {
            continue;
        }
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().to_string()) else {
            continue;
        };

        if filter.is_preserved(&name) {
            tracing::info!(file = %name, "✓ preserving");
            report.preserved.push(name);
            continue;
        }

        storage.remove_file(&path)?;
        tracing::info!(file = %name, "✗ removed");
        report.removed.push(name);
    }

    if storage.is_dir(&mods_dir.join("user")) {
        tracing::info!("✓ preserving user/ directory");
    }

    Ok(report)
}

pub(crate) fn is_jar(path: &Path) -> bool {
    path.extension().map(|e| e == "jar").unwrap_or(false)
}
