//! Pkgmirror - mirror package artifacts from explicit spec files
//!
//! Pkgmirror reads package spec files (text files carrying an `@EXPLICIT`
//! marker and one artifact URL per line), aggregates their locators, and
//! mirrors the referenced artifacts into a local directory tree that
//! preserves each artifact's trailing channel path.

pub mod cli;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod mirror;
pub mod report;
pub mod resolve;
pub mod spec;
pub mod walk;

// Re-exports for convenience
pub use error::{MirrorError, MirrorResult};
pub use fetch::{FetchError, Fetcher, HttpFetcher};
pub use mirror::{MirrorEngine, TransferFailure, TransferStats};
pub use report::render;
pub use resolve::resolve;
pub use spec::SpecDocument;
pub use walk::find_spec_files;
