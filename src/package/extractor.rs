use crate::core::{SyncError, SyncResult};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// Extracts package archives (zip-compatible `.mrpack`) into a directory
pub struct PackageExtractor {
    dest_dir: PathBuf,
}

impl PackageExtractor {
    /// Create a new PackageExtractor
    pub fn new(dest_dir: PathBuf) -> Self {
        Self { dest_dir }
    }

    /// Extract an archive file into the destination directory.
    ///
    /// Entries whose names would escape the destination are rejected by the
    /// zip reader and fail the whole extraction. Returns the destination.
    pub fn extract(&self, archive_path: &Path) -> SyncResult<PathBuf> {
        let file = File::open(archive_path).map_err(|e| {
            SyncError::Archive(format!("Cannot open {}: {}", archive_path.display(), e))
        })?;
        let mut archive = ZipArchive::new(file)
            .map_err(|e| SyncError::Archive(format!("Invalid zip: {}", e)))?;

        fs::create_dir_all(&self.dest_dir)?;

        archive
            .extract(&self.dest_dir)
            .map_err(|e| SyncError::Archive(format!("Extract failed: {}", e)))?;

        Ok(self.dest_dir.clone())
    }
}
