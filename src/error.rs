//! Error types for bittrie
//!
//! Only construction and parsing can fail with an error. Overlapping
//! inserts, exhausted allocations and out-of-space lookups are ordinary
//! outcomes reported as `false` / `None` by the trie and address space.

use thiserror::Error;

/// Result type alias for bittrie operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building an address space
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("IPv4 only: {0}")]
    NotIpv4(String),

    #[error("Invalid prefix: {0}")]
    InvalidPrefix(String),
}

impl From<ipnet::AddrParseError> for Error {
    fn from(err: ipnet::AddrParseError) -> Self {
        Error::InvalidPrefix(err.to_string())
    }
}
