//! Error types for the UNIAG registry
//!
//! Only validation failures are errors. Unresolved ids are reported through
//! `Option`/`bool` returns by the registry and never reach this type.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the registry domain model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A name, title or funding amount failed validation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Build an `InvalidArgument` from anything string-like
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Error::InvalidArgument(reason.into())
    }

    /// The human-readable reason carried by this error
    pub fn reason(&self) -> &str {
        match self {
            Error::InvalidArgument(reason) => reason,
        }
    }
}
