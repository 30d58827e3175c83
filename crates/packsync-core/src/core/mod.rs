pub mod error;
pub mod error_help;
pub mod path;
