//! Trait definitions for dependency injection

use crate::core::{FetchError, SyncResult};
use crate::modrinth::types::PackageVersion;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Trait for configuration access
///
/// Provides read-only access to the parsed configuration.
/// Implementations should be thread-safe (Send + Sync).
pub trait ConfigProvider: Send + Sync {
    /// Registry project id of the modpack
    fn modpack_id(&self) -> &str;

    /// Target instance directory
    fn instance_dir(&self) -> &Path;

    /// Owner applied after install (optional)
    fn permission_user(&self) -> Option<&str>;

    /// Group applied after install (optional, defaults to the user)
    fn permission_group(&self) -> Option<&str>;

    /// Filename patterns exempt from cleanup
    fn preserved_mods(&self) -> &[String];

    /// Filename patterns never installed on the server
    fn client_only_mods(&self) -> &[String];

    /// Registry API base URL
    fn api_url(&self) -> &str;

    /// Maximum number of concurrent downloads
    fn max_concurrent_downloads(&self) -> usize;

    /// Timeout for registry metadata calls
    fn api_timeout(&self) -> Duration;

    /// Timeout for each content download
    fn download_timeout(&self) -> Duration;
}

/// Trait for the version registry
///
/// Lists the published versions of a project, newest first.
#[async_trait]
pub trait RegistryProvider: Send + Sync {
    async fn list_versions(&self, project_id: &str) -> SyncResult<Vec<PackageVersion>>;
}

/// Trait for raw content retrieval
///
/// Implementations perform a single bounded-time request and return the
/// body. Verification is layered on top by `VerifiedFetcher`.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Trait for filesystem access used by the sync engine
pub trait Storage: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if a path is a regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Read a whole file
    fn read(&self, path: &Path) -> SyncResult<Vec<u8>>;

    /// Write a file, creating missing parent directories
    fn write(&self, path: &Path, data: &[u8]) -> SyncResult<()>;

    /// Write a file so readers never observe a partial write
    fn write_atomic(&self, path: &Path, data: &[u8]) -> SyncResult<()>;

    /// Create a directory and its parents
    fn create_dir_all(&self, path: &Path) -> SyncResult<()>;

    /// Remove a file
    fn remove_file(&self, path: &Path) -> SyncResult<()>;

    /// Remove a directory and everything below it
    fn remove_dir_all(&self, path: &Path) -> SyncResult<()>;

    /// List the direct children of a directory, sorted by name
    fn list_dir(&self, path: &Path) -> SyncResult<Vec<PathBuf>>;

    /// Copy a single file, overwriting the destination
    fn copy_file(&self, from: &Path, to: &Path) -> SyncResult<()>;

    /// Copy a directory tree onto `to`
    fn copy_tree(&self, from: &Path, to: &Path) -> SyncResult<()>;
}

/// Trait for OS-level ownership adjustment
///
/// Invoked by the sync engine after an install when ownership is configured.
pub trait OwnershipFixer: Send + Sync {
    /// Recursively assign `user`/`group` to `path`
    fn apply_ownership(&self, path: &Path, user: &str, group: Option<&str>) -> SyncResult<()>;
}
