//! Integration tests for the packsync CLI
//!
//! Each test gets an isolated instance directory and config file. Registry
//! and CDN traffic is served by a local wiremock server.

pub mod check;
pub mod cli;
pub mod common;
pub mod install;
