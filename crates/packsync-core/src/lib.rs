//! Core utilities shared by Packsync: the error taxonomy and the
//! instance directory layout.

pub mod core;

pub use core::error::{FetchError, SyncError, SyncResult};
pub use core::error_help::{format_error_with_help, ErrorHelp};
