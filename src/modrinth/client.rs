//! Modrinth API client implementation

use crate::core::{SyncError, SyncResult};
use crate::di::traits::RegistryProvider;
use crate::modrinth::types::PackageVersion;
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient};
use std::time::Duration;

/// User agent sent with every request, as Modrinth asks clients to identify themselves
pub const USER_AGENT: &str = concat!(
    "packsync/",
    env!("CARGO_PKG_VERSION"),
    " (github.com/yourusername/packsync)"
);

/// Build an HTTP client with the Packsync user agent and a request timeout
pub fn http_client(timeout: Duration) -> SyncResult<HttpClient> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        header::HeaderValue::from_static(USER_AGENT),
    );

    HttpClient::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .map_err(|e| SyncError::Config(format!("Failed to create HTTP client: {}", e)))
}

/// Modrinth API client
pub struct ModrinthClient {
    http_client: HttpClient,
    api_url: String,
}

impl ModrinthClient {
    /// Create a new client against `api_url` (e.g. `https://api.modrinth.com/v2`)
    pub fn new(api_url: &str, timeout: Duration) -> SyncResult<Self> {
        Ok(Self {
            http_client: http_client(timeout)?,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// List the versions of a project, newest first
    pub async fn get_versions(&self, project_id: &str) -> SyncResult<Vec<PackageVersion>> {
        let url = format!("{}/project/{}/version", self.api_url, project_id);
        tracing::debug!(%url, "fetching version list");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| SyncError::Registry(format!("API request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(SyncError::Registry(format!(
                "API request failed: HTTP {} for {}",
                response.status(),
                url
            )));
        }

        response
            .json::<Vec<PackageVersion>>()
            .await
            .map_err(|e| SyncError::Registry(format!("Failed to parse version list: {}", e)))
    }
}

#[async_trait]
impl RegistryProvider for ModrinthClient {
    async fn list_versions(&self, project_id: &str) -> SyncResult<Vec<PackageVersion>> {
        self.get_versions(project_id).await
    }
}
