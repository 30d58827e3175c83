//! Verified retrieval of remote content.

use crate::core::{FetchError, SyncResult};
use crate::di::{Fetcher, Storage};
use crate::modrinth::client::http_client;
use crate::modrinth::types::Hashes;
use crate::package::checksum::ChecksumAlgorithm;
use async_trait::async_trait;
use reqwest::Client;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// [`Fetcher`] over HTTP with a per-request timeout
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> SyncResult<Self> {
        Ok(Self {
            client: http_client(timeout)?,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::transport(url, format!("HTTP status {}", status)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::transport(url, e))?;
        Ok(bytes.to_vec())
    }
}

/// Check a payload against its declared size and hashes.
///
/// The size is checked first when declared; a declared size of zero counts
/// as undeclared. Of the hashes, sha512 wins over sha1; when neither is
/// present the hash check is skipped.
pub fn verify_payload(
    data: &[u8],
    expected_size: Option<u64>,
    expected_hashes: &Hashes,
) -> Result<(), FetchError> {
    let actual_size = data.len() as u64;
    if let Some(expected) = expected_size.filter(|size| *size > 0) {
        if actual_size != expected {
            return Err(FetchError::SizeMismatch {
                expected,
                actual: actual_size,
            });
        }
    }

    if let Some((algorithm, expected)) = ChecksumAlgorithm::select(expected_hashes) {
        let actual = algorithm.digest_hex(data);
        if !actual.eq_ignore_ascii_case(expected.trim()) {
            return Err(FetchError::HashMismatch {
                algorithm: algorithm.name().to_string(),
                expected: expected.to_string(),
                actual,
            });
        }
    }

    Ok(())
}

/// Fetches content and verifies it before anything touches disk
pub struct VerifiedFetcher {
    fetcher: Arc<dyn Fetcher>,
    storage: Arc<dyn Storage>,
}

impl VerifiedFetcher {
    pub fn new(fetcher: Arc<dyn Fetcher>, storage: Arc<dyn Storage>) -> Self {
        Self { fetcher, storage }
    }

    /// Fetch `url` into memory and verify it
    pub async fn fetch(
        &self,
        url: &str,
        expected_size: Option<u64>,
        expected_hashes: &Hashes,
    ) -> Result<Vec<u8>, FetchError> {
        let data = self.fetcher.fetch(url).await?;
        verify_payload(&data, expected_size, expected_hashes)?;
        Ok(data)
    }

    /// Fetch `url`, verify it, then write it to `dest`.
    ///
    /// Nothing is written when verification fails. Returns the byte count.
    pub async fn fetch_to(
        &self,
        url: &str,
        dest: &Path,
        expected_size: Option<u64>,
        expected_hashes: &Hashes,
    ) -> Result<u64, FetchError> {
        let data = self.fetch(url, expected_size, expected_hashes).await?;
        self.storage
            .write(dest, &data)
            .map_err(|e| FetchError::Write {
                path: dest.display().to_string(),
                message: e.to_string(),
            })?;
        Ok(data.len() as u64)
    }
}
