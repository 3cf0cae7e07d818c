use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors from the stateful catalog shell. The engine functions
/// themselves never fail: malformed payloads resolve to empty views and
/// comparison policy violations are reported as values.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid listing: {0}")]
    InvalidListing(String),

    #[error("Listing not found: {0}")]
    ListingNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
