//! Packsync: keeps a dedicated server's mod directory in sync with a
//! modpack published on Modrinth.
//!
//! This crate provides the synchronization engine, re-exporting the error
//! taxonomy and instance layout from `packsync-core` and organizing the
//! registry client, package handling, and orchestration modules.

pub use packsync_core::{format_error_with_help, ErrorHelp, FetchError, SyncError, SyncResult};

/// Core module re-exported from packsync-core.
pub mod core {
    pub use packsync_core::core::*;
    pub use packsync_core::*;

    /// Instance layout helpers re-exported from packsync-core.
    pub mod path {
        pub use packsync_core::core::path::*;
    }
}

/// Configuration loading.
pub mod config;

/// Dependency injection infrastructure.
pub mod di;

/// Modrinth registry client.
pub mod modrinth;

/// Package handling: manifest, filtering, downloads, overrides, state.
pub mod package;

/// Install/update orchestration.
pub mod sync;
