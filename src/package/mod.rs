pub mod checksum;
pub mod cleaner;
pub mod downloader;
pub mod extractor;
pub mod fetcher;
pub mod filter;
pub mod manifest;
pub mod overrides;
pub mod ownership;
pub mod state;
pub mod storage;

pub use checksum::ChecksumAlgorithm;
pub use cleaner::{clean_mods_dir, CleanReport};
pub use downloader::{DownloadCoordinator, DownloadReport, DownloadTask};
pub use extractor::PackageExtractor;
pub use fetcher::{verify_payload, HttpFetcher, VerifiedFetcher};
pub use filter::ContentFilter;
pub use manifest::{EntryKind, EnvRequirement, ManifestEntry, ManifestIndex};
pub use overrides::{OverrideMerger, OverrideReport};
pub use ownership::SystemOwnership;
pub use state::{InstallState, StateStore};
pub use storage::LocalStorage;
