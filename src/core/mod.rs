//! Plumbing shared by every command
//!
//! - **config**: optional changelog-notes.toml parsing
//! - **context**: layered, validated settings for one run
//! - **error**: error types with exit codes and help messages
//! - **output**: GitHub Actions step outputs

pub mod config;
pub mod context;
pub mod error;
pub mod output;
