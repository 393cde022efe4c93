//! Changelog release extraction
//!
//! - **heading**: release heading rules and matchers
//! - **extractor**: the three-state scan that slices out one release
//! - **source**: changelog files as line sources
//! - **notes**: turning a scan result into publishable notes

pub mod extractor;
pub mod heading;
pub mod notes;
pub mod source;

pub use extractor::ExtractionResult;
pub use heading::HeadingRule;
pub use notes::ReleaseNotes;
pub use source::ChangelogSource;
