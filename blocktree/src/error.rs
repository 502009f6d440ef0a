use thiserror::Error;

/// Errors from tree construction and digest parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The builder was handed no blocks; a tree needs at least one.
    #[error("construction error: {0}")]
    ConstructionError(String),
    /// A textual digest could not be decoded.
    #[error("invalid digest: {0}")]
    InvalidDigest(String),
}

/// Alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;
