//! Error types for pkgmirror
//!
//! Uses `thiserror` for library errors. Per-item transfer failures are not
//! errors at this level; the mirror engine records them in `TransferStats`
//! and keeps going.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pkgmirror operations
pub type MirrorResult<T> = Result<T, MirrorError>;

/// Main error type for pkgmirror operations
#[derive(Error, Debug)]
pub enum MirrorError {
    /// Spec file lacks the required `@EXPLICIT` marker
    #[error("invalid spec file {path}: missing @EXPLICIT marker")]
    InvalidSpec { path: PathBuf },

    /// Locator has too few path separators to derive a destination
    #[error("malformed locator '{locator}': fewer than 3 path separators")]
    MalformedLocator { locator: String },

    /// Invalid glob pattern supplied by the caller
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] globset::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_invalid_spec() {
        let err = MirrorError::InvalidSpec {
            path: PathBuf::from("specs/broken.txt"),
        };
        assert_eq!(
            err.to_string(),
            "invalid spec file specs/broken.txt: missing @EXPLICIT marker"
        );
    }

    #[test]
    fn test_error_display_malformed_locator() {
        let err = MirrorError::MalformedLocator {
            locator: "http:/one".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed locator 'http:/one': fewer than 3 path separators"
        );
    }
}
