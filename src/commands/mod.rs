//! CLI commands for changelog-notes
//!
//! - **extract**: pull one release's notes out of a changelog and publish them

pub mod extract;

pub use extract::run_extract;
