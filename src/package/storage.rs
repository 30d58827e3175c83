use crate::core::{SyncError, SyncResult};
use crate::di::Storage;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// [`Storage`] backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> SyncResult<Vec<u8>> {
        Ok(fs::read(path)?)
    }

    fn write(&self, path: &Path, data: &[u8]) -> SyncResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, data)?;
        Ok(())
    }

    fn write_atomic(&self, path: &Path, data: &[u8]) -> SyncResult<()> {
        let parent = path
            .parent()
            .ok_or_else(|| SyncError::Path(format!("No parent directory: {}", path.display())))?;
        fs::create_dir_all(parent)?;

        let mut temp = tempfile::NamedTempFile::new_in(parent)?;
        temp.write_all(data)?;
        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| SyncError::Io(e.error))?;
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> SyncResult<()> {
        fs::create_dir_all(path)?;
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> SyncResult<()> {
        fs::remove_file(path)?;
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> SyncResult<()> {
        fs::remove_dir_all(path)?;
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> SyncResult<Vec<PathBuf>> {
        let mut entries = fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()?;
        entries.sort();
        Ok(entries)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> SyncResult<()> {
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(from, to)?;
        Ok(())
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> SyncResult<()> {
        for entry in WalkDir::new(from) {
            let entry = entry?;
            let relative = entry.path().strip_prefix(from).map_err(|_| {
                SyncError::Path(format!("{} is outside {}", entry.path().display(), from.display()))
            })?;
            let target = to.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target)?;
            } else {
                self.copy_file(entry.path(), &target)?;
            }
        }
        Ok(())
    }
}
