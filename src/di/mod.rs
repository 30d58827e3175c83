//! Dependency injection infrastructure for Packsync
//!
//! The sync engine talks to the registry, the network, the filesystem and
//! the OS through the traits in [`traits`], so tests can swap any of them.
//!
//! # Example (Production)
//! ```no_run
//! use packsync::config::Config;
//! use packsync::di::ServiceContainer;
//!
//! # fn example() -> packsync::SyncResult<()> {
//! let config = Config::new("fabulously-optimized", "/srv/minecraft");
//! let container = ServiceContainer::new(config)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example (Testing)
//! ```
//! use packsync::config::Config;
//! use packsync::di::{ServiceContainer, mocks::*};
//! use packsync::package::storage::LocalStorage;
//! use std::sync::Arc;
//!
//! let container = ServiceContainer::with_providers(
//!     Arc::new(Config::new("pack", "/tmp/instance")),
//!     Arc::new(MockRegistry::new(Vec::new())),
//!     Arc::new(MockFetcher::new()),
//!     Arc::new(LocalStorage::new()),
//!     Arc::new(MockOwnershipFixer::new()),
//! );
//! ```

pub mod container;
pub mod mocks;
pub mod traits;

// Re-export key types
pub use container::ServiceContainer;
pub use traits::{ConfigProvider, Fetcher, OwnershipFixer, RegistryProvider, Storage};
