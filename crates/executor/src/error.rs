//! Error types for command execution.
//!
//! Errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//!
//! An unknown id is never an error; see the crate docs.

use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// # Example
///
/// ```ignore
/// use uniag_executor::{Command, Error};
///
/// match executor.execute(cmd) {
///     Ok(output) => { /* handle success */ }
///     Err(Error::InvalidArgument { reason }) => {
///         println!("Rejected: {}", reason);
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    /// A name, title or funding amount failed validation
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the input
        reason: String,
    },
}
