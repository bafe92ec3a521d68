//! Spec file discovery
//!
//! Recursive directory walk yielding the spec files whose name matches a
//! shell-style glob. Unreadable entries are skipped rather than failing
//! the enumeration.

use std::path::{Path, PathBuf};

use globset::Glob;
use walkdir::WalkDir;

use crate::error::MirrorResult;

/// Lazily find spec files under `base` whose file name matches `pattern`
pub fn find_spec_files(
    base: &Path,
    pattern: &str,
) -> MirrorResult<impl Iterator<Item = PathBuf>> {
    let matcher = Glob::new(pattern)?.compile_matcher();

    Ok(WalkDir::new(base)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(move |entry| matcher.is_match(entry.file_name()))
        .map(|entry| entry.into_path()))
}
