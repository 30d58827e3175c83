//! Install/update orchestration
//!
//! [`SyncEngine`] resolves the latest modpack version, compares it with the
//! installed marker and, when needed, replays the whole manifest onto the
//! instance directory.

pub mod engine;
pub mod summary;

pub use engine::{DownloadPlan, SyncEngine, SyncMode};
pub use summary::{CheckReport, SyncOutcome, SyncSummary, VersionStatus};
