use crate::core::path::version_file;
use crate::core::SyncResult;
use crate::di::Storage;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Install state of an instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallState {
    NotInstalled,
    Installed(String),
}

impl InstallState {
    pub fn version_id(&self) -> Option<&str> {
        match self {
            InstallState::NotInstalled => None,
            InstallState::Installed(id) => Some(id),
        }
    }
}

/// Reads and commits the `.modpack_version` marker
pub struct StateStore {
    storage: Arc<dyn Storage>,
    path: PathBuf,
}

impl StateStore {
    pub fn new(storage: Arc<dyn Storage>, instance_dir: &Path) -> Self {
        Self {
            storage,
            path: version_file(instance_dir),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing or blank marker means nothing is installed
    pub fn load(&self) -> SyncResult<InstallState> {
        if !self.storage.is_file(&self.path) {
            return Ok(InstallState::NotInstalled);
        }

        let bytes = self.storage.read(&self.path)?;
        let id = String::from_utf8_lossy(&bytes).trim().to_string();
        if id.is_empty() {
            Ok(InstallState::NotInstalled)
        } else {
            Ok(InstallState::Installed(id))
        }
    }

    /// Atomically record `version_id` as installed
    pub fn commit(&self, version_id: &str) -> SyncResult<()> {
        self.storage.write_atomic(&self.path, version_id.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::storage::LocalStorage;
    use tempfile::TempDir;

    fn store(dir: &Path) -> StateStore {
        StateStore::new(Arc::new(LocalStorage::new()), dir)
    }

    #[test]
    fn test_fresh_instance_not_installed() {
        let temp = TempDir::new().unwrap();
        assert_eq!(store(temp.path()).load().unwrap(), InstallState::NotInstalled);
    }

    #[test]
    fn test_commit_then_load() {
        let temp = TempDir::new().unwrap();
        let store = store(temp.path());

        store.commit("IZskON6d").unwrap();
        assert_eq!(
            store.load().unwrap(),
            InstallState::Installed("IZskON6d".to_string())
        );
        assert_eq!(
            std::fs::read_to_string(temp.path().join(".modpack_version")).unwrap(),
            "IZskON6d"
        );
    }

    #[test]
    fn test_load_trims_whitespace() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".modpack_version"), "abc123\n").unwrap();
        assert_eq!(
            store(temp.path()).load().unwrap().version_id(),
            Some("abc123")
        );
    }

    #[test]
    fn test_blank_marker_not_installed() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".modpack_version"), "  \n").unwrap();
        assert_eq!(store(temp.path()).load().unwrap(), InstallState::NotInstalled);
    }
}
