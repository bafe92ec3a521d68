//! Spec file parser
//!
//! Handles reading and validation of package spec files: plain UTF-8 text
//! with an `@EXPLICIT` format marker, `#` comments, `@` directives, and one
//! artifact locator per remaining line.

use std::fs;
use std::path::{Path, PathBuf};

use globset::Glob;

use crate::error::{MirrorError, MirrorResult};

/// Marker a spec file must carry (as a line prefix) to be considered valid
const EXPLICIT_MARKER: &str = "@EXPLICIT";

/// A validated spec file and its extracted locator lines
///
/// Locators keep their original order; duplicates are preserved at this
/// stage and left to the caller to fold away.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecDocument {
    source: PathBuf,
    locators: Vec<String>,
}

impl SpecDocument {
    /// Read and validate a spec file in one pass
    ///
    /// Fails with [`MirrorError::InvalidSpec`] if no line of the file starts
    /// with `@EXPLICIT`. Otherwise every non-blank line that is neither a
    /// `#` comment nor an `@` directive is kept, whitespace-trimmed, in
    /// original order.
    pub fn parse(path: &Path) -> MirrorResult<Self> {
        let content = fs::read_to_string(path)?;

        if !content.lines().any(|line| line.starts_with(EXPLICIT_MARKER)) {
            return Err(MirrorError::InvalidSpec {
                path: path.to_path_buf(),
            });
        }

        let locators = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('@'))
            .map(str::to_string)
            .collect();

        Ok(Self {
            source: path.to_path_buf(),
            locators,
        })
    }

    /// Path of the file this document was parsed from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The extracted locator lines, in file order
    pub fn locators(&self) -> &[String] {
        &self.locators
    }

    /// Replace a path segment token across the document, in place
    ///
    /// A locator is rewritten only when `old` matches one of its
    /// `/`-delimited segments exactly; the rewrite then substitutes the
    /// first textual occurrence of `old` anywhere in the locator string.
    /// Locators where `old` appears only as a substring of a segment are
    /// left untouched.
    pub fn replace(&mut self, old: &str, new: &str) {
        for locator in &mut self.locators {
            if locator.split('/').any(|segment| segment == old) {
                *locator = locator.replacen(old, new, 1);
            }
        }
    }

    /// Lazily yield locators whose full string matches a shell-style glob
    ///
    /// Supports `*`, `?` and `[seq]`. Each call re-scans the document from
    /// the start, so the returned iterator can be recreated at will.
    pub fn search<'a>(
        &'a self,
        pattern: &str,
    ) -> MirrorResult<impl Iterator<Item = &'a str> + 'a> {
        let matcher = Glob::new(pattern)?.compile_matcher();
        Ok(self
            .locators
            .iter()
            .map(String::as_str)
            .filter(move |locator| matcher.is_match(locator)))
    }
}
