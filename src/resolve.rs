//! Destination path derivation
//!
//! Maps a locator onto a `(directory, filename)` pair under a destination
//! root. Locators are assumed to carry a fixed-depth scheme/host/channel
//! prefix; only the trailing channel segments are preserved in the mirror
//! tree, which keeps the local tree shallow while still grouping files by
//! their source channel.

use std::path::{Path, PathBuf};

use crate::error::{MirrorError, MirrorResult};

/// Derive the local directory and filename for a locator
///
/// The filename is everything after the last `/`. The directory is the
/// locator substring between the 3rd-from-last and last `/`, joined under
/// `destination_root`:
///
/// ```
/// use std::path::{Path, PathBuf};
/// use pkgmirror::resolve;
///
/// let (dir, name) = resolve("http://x/y/z/w/pkg.tar", Path::new("/root")).unwrap();
/// assert_eq!(dir, PathBuf::from("/root/z/w"));
/// assert_eq!(name, "pkg.tar");
/// ```
///
/// Fails with [`MirrorError::MalformedLocator`] when the locator holds
/// fewer than 3 separators.
pub fn resolve(locator: &str, destination_root: &Path) -> MirrorResult<(PathBuf, String)> {
    let separators: Vec<usize> = locator.match_indices('/').map(|(idx, _)| idx).collect();

    if separators.len() < 3 {
        return Err(MirrorError::MalformedLocator {
            locator: locator.to_string(),
        });
    }

    // Start after the 3rd-from-last separator, stop at the last one.
    let begin = separators[separators.len() - 3] + 1;
    let end = separators[separators.len() - 1];

    let directory = destination_root.join(&locator[begin..end]);
    let filename = locator[end + 1..].to_string();

    Ok((directory, filename))
}
