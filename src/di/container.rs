//! Service container for dependency injection

use super::traits::{ConfigProvider, Fetcher, OwnershipFixer, RegistryProvider, Storage};
use crate::config::Config;
use crate::core::SyncResult;
use crate::modrinth::client::ModrinthClient;
use crate::package::fetcher::HttpFetcher;
use crate::package::ownership::SystemOwnership;
use crate::package::storage::LocalStorage;
use std::sync::Arc;

/// Service container for dependency injection
///
/// Holds every capability the sync engine needs as a trait object, so the
/// engine never constructs its own I/O.
#[derive(Clone)]
pub struct ServiceContainer {
    pub config: Arc<dyn ConfigProvider>,
    pub registry: Arc<dyn RegistryProvider>,
    pub fetcher: Arc<dyn Fetcher>,
    pub storage: Arc<dyn Storage>,
    pub ownership: Arc<dyn OwnershipFixer>,
}

impl ServiceContainer {
    /// Create a new service container with production implementations
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be built.
    pub fn new(config: Config) -> SyncResult<Self> {
        let registry = ModrinthClient::new(config.api_url(), config.api_timeout())?;
        let fetcher = HttpFetcher::new(config.download_timeout())?;

        Ok(Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
            fetcher: Arc::new(fetcher),
            storage: Arc::new(LocalStorage::new()),
            ownership: Arc::new(SystemOwnership),
        })
    }

    /// Create a service container with custom providers (for testing)
    pub fn with_providers(
        config: Arc<dyn ConfigProvider>,
        registry: Arc<dyn RegistryProvider>,
        fetcher: Arc<dyn Fetcher>,
        storage: Arc<dyn Storage>,
        ownership: Arc<dyn OwnershipFixer>,
    ) -> Self {
        Self {
            config,
            registry,
            fetcher,
            storage,
            ownership,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_new_uses_config() {
        let config = Config::new("my-pack", "/srv/minecraft");
        let container = ServiceContainer::new(config).unwrap();
        assert_eq!(container.config.modpack_id(), "my-pack");
        assert_eq!(container.config.max_concurrent_downloads(), 10);
    }
}
