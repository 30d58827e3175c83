//! Mock implementations of service traits for testing

use super::traits::{Fetcher, OwnershipFixer, RegistryProvider};
use crate::core::{FetchError, SyncError, SyncResult};
use crate::modrinth::types::PackageVersion;
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock registry returning a fixed version list
///
/// # Example
///
/// ```
/// use packsync::di::mocks::MockRegistry;
///
/// let registry = MockRegistry::new(Vec::new());
/// assert_eq!(registry.call_count(), 0);
/// ```
#[derive(Clone)]
pub struct MockRegistry {
    versions: Arc<Mutex<Vec<PackageVersion>>>,
    unreachable: bool,
    calls: Arc<Mutex<usize>>,
}

impl MockRegistry {
    /// Create a registry serving `versions` (newest first)
    pub fn new(versions: Vec<PackageVersion>) -> Self {
        Self {
            versions: Arc::new(Mutex::new(versions)),
            unreachable: false,
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a registry whose every call fails
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::new(Vec::new())
        }
    }

    /// Replace the served version list
    pub fn set_versions(&self, versions: Vec<PackageVersion>) {
        *self.versions.lock().unwrap() = versions;
    }

    /// Number of `list_versions` calls made so far
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl RegistryProvider for MockRegistry {
    async fn list_versions(&self, project_id: &str) -> SyncResult<Vec<PackageVersion>> {
        *self.calls.lock().unwrap() += 1;
        if self.unreachable {
            return Err(SyncError::Registry(format!(
                "API request failed for project {}: connection refused",
                project_id
            )));
        }
        Ok(self.versions.lock().unwrap().clone())
    }
}

/// Mock fetcher serving in-memory payloads by URL
///
/// Unknown URLs fail with a transport error. Every request is recorded.
#[derive(Clone, Default)]
pub struct MockFetcher {
    responses: Arc<Mutex<HashMap<String, Result<Vec<u8>, FetchError>>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `data` for `url`
    pub fn add_response(&self, url: &str, data: Vec<u8>) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), Ok(data));
    }

    /// Fail requests for `url` with `error`
    pub fn add_error(&self, url: &str, error: FetchError) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), Err(error));
    }

    /// All URLs requested so far, in request order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::transport(url, "HTTP status 404 Not Found")))
    }
}

/// Mock ownership fixer recording every call
#[derive(Clone, Default)]
pub struct MockOwnershipFixer {
    calls: Arc<Mutex<Vec<(PathBuf, String, Option<String>)>>>,
    fail: bool,
}

impl MockOwnershipFixer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fixer whose every call fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Recorded `(path, user, group)` calls
    pub fn calls(&self) -> Vec<(PathBuf, String, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl OwnershipFixer for MockOwnershipFixer {
    fn apply_ownership(&self, path: &Path, user: &str, group: Option<&str>) -> SyncResult<()> {
        self.calls.lock().unwrap().push((
            path.to_path_buf(),
            user.to_string(),
            group.map(str::to_string),
        ));
        if self.fail {
            return Err(SyncError::Permission(format!("unknown user: {}", user)));
        }
        Ok(())
    }
}

/// Build an in-memory `.mrpack` (zip) archive
///
/// `index` becomes `modrinth.index.json` unless it is `None`; `files` are
/// `(path, content)` pairs such as `("overrides/config/a.txt", "...")`.
pub fn build_mrpack(index: Option<&str>, files: &[(&str, &str)]) -> Vec<u8> {
    let mut zip = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = zip::write::FileOptions::default();

    if let Some(index) = index {
        zip.start_file(crate::package::manifest::INDEX_FILE, options)
            .unwrap();
        zip.write_all(index.as_bytes()).unwrap();
    }

    for (path, content) in files {
        zip.start_file(*path, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }

    zip.finish().unwrap().into_inner()
}
