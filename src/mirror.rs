//! Mirroring engine
//!
//! Walks an ordered locator list, derives a destination path per item,
//! skips artifacts that already exist locally, and streams the rest to
//! disk in bounded chunks while accumulating [`TransferStats`].
//!
//! Processing is strictly sequential: one locator, one remote handle and
//! one local file handle at a time. Callers wanting deterministic runs
//! pre-sort and deduplicate the list.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::error::MirrorResult;
use crate::fetch::{FetchError, Fetcher};
use crate::resolve::resolve;

/// Transfer chunk size (64 KiB)
const CHUNK_SIZE: usize = 64 * 1024;

/// A locator that could not be mirrored, with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferFailure {
    /// The locator as it appeared in the input list
    pub locator: String,
    /// Human-readable error description
    pub reason: String,
}

impl TransferFailure {
    fn new(locator: &str, reason: impl Into<String>) -> Self {
        Self {
            locator: locator.to_string(),
            reason: reason.into(),
        }
    }
}

/// Accumulated result of one mirroring run
///
/// Mutated only by the engine while the run is in flight; read-only for
/// reporting afterwards.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransferStats {
    /// Bytes fetched from remote sources
    pub read: u64,
    /// Bytes persisted to local files
    pub written: u64,
    /// Artifacts transferred completely
    pub success: u64,
    /// Artifacts already present locally, left untouched
    pub skipped: u64,
    /// Per-item failures outside the remote protocol (connection reset,
    /// local IO), in input order
    pub fatal: Vec<TransferFailure>,
    /// Server-reported rejections (HTTP error status), in input order
    pub fail: Vec<TransferFailure>,
}

impl TransferStats {
    /// True when no locator failed
    pub fn is_clean(&self) -> bool {
        self.fatal.is_empty() && self.fail.is_empty()
    }
}

/// Failure of a single item's open/transfer, before classification
#[derive(Error, Debug)]
enum TransferError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Sequential mirroring engine over a [`Fetcher`]
pub struct MirrorEngine<F> {
    fetcher: F,
    destination: PathBuf,
}

impl<F: Fetcher> MirrorEngine<F> {
    pub fn new(fetcher: F, destination: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            destination: destination.into(),
        }
    }

    /// Mirror every locator, in input order
    ///
    /// Per-item transfer failures are recorded in the returned stats and
    /// never abort the run. Only two conditions propagate as errors and
    /// abort: a malformed locator (a structurally broken spec, not a
    /// network condition) and failure to create a destination directory.
    pub fn run(&self, locators: &[String]) -> MirrorResult<TransferStats> {
        let mut stats = TransferStats::default();

        for locator in locators {
            self.mirror_one(locator, &mut stats)?;
        }

        Ok(stats)
    }

    fn mirror_one(&self, locator: &str, stats: &mut TransferStats) -> MirrorResult<()> {
        let (directory, filename) = resolve(locator, &self.destination)?;
        let fullpath = directory.join(&filename);

        if !directory.exists() {
            fs::create_dir_all(&directory)?;
        } else if fullpath.exists() {
            stats.skipped += 1;
            return Ok(());
        }

        match self.transfer(locator, &fullpath, stats) {
            Ok(()) => stats.success += 1,
            Err(TransferError::Fetch(err @ FetchError::Status { .. })) => {
                stats.fail.push(TransferFailure::new(locator, err.to_string()));
            }
            Err(err) => {
                stats.fatal.push(TransferFailure::new(locator, err.to_string()));
            }
        }

        Ok(())
    }

    /// Stream one artifact to disk in bounded chunks
    ///
    /// A failure mid-stream leaves the partial file on disk as-is.
    fn transfer(
        &self,
        locator: &str,
        fullpath: &std::path::Path,
        stats: &mut TransferStats,
    ) -> Result<(), TransferError> {
        let mut remote = self.fetcher.open(locator)?;
        let mut file = File::create(fullpath)?;

        debug!("writing {}", fullpath.display());

        let mut chunk = vec![0u8; CHUNK_SIZE];
        loop {
            let count = remote.read(&mut chunk)?;
            stats.read += count as u64;
            if count == 0 {
                break;
            }
            file.write_all(&chunk[..count])?;
            stats.written += count as u64;
        }

        Ok(())
    }
}
