//! Modrinth registry integration
//!
//! This module lists the published versions of a modpack project and
//! describes the artifacts attached to each version.

pub mod client;
pub mod types;

pub use client::ModrinthClient;
pub use types::{Hashes, PackageVersion, VersionFile};
