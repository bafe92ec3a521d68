//! Remote fetch seam
//!
//! The mirror engine talks to the remote side through the [`Fetcher`]
//! trait so transfers can be exercised in tests without a network. The
//! production implementation is [`HttpFetcher`] on top of a blocking
//! `reqwest` client.

use std::io::Read;

use thiserror::Error;

/// Failure opening a remote resource, split by who is at fault
///
/// [`FetchError::Status`] is a server-reported rejection and is recorded
/// as a plain per-item failure; everything else lands in
/// [`FetchError::Transport`] and is treated as fatal for that item.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Server answered and rejected the request (e.g. not found, forbidden)
    #[error("HTTP status {code}")]
    Status { code: u16 },

    /// Connection, DNS, TLS or any other transport-level failure
    #[error("{message}")]
    Transport { message: String },
}

/// Abstract remote source of artifact bytes
pub trait Fetcher {
    /// Open the resource behind `locator` for sequential reading
    fn open(&self, locator: &str) -> Result<Box<dyn Read>, FetchError>;
}

/// Blocking HTTP fetcher
///
/// No timeouts are configured on the remote read; a hung server blocks
/// the whole run. Known limitation.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for HttpFetcher {
    fn open(&self, locator: &str) -> Result<Box<dyn Read>, FetchError> {
        let response = self
            .client
            .get(locator)
            .send()
            .map_err(|err| FetchError::Transport {
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }

        Ok(Box::new(response))
    }
}
