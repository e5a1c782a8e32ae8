//! # UNIAG Executor
//!
//! The command interface to the UNIAG registry.
//!
//! It provides:
//! - [`Command`]/[`Output`] - serializable request/response pairs
//! - [`Executor`] - dispatches commands against a shared registry
//! - [`MemberInfo`], [`ProjectInfo`], [`ProjectDetail`] - owned views returned in outputs
//!
//! ## Quick Start
//!
//! ```text
//! use uniag_executor::{Command, Executor, MemberKind, Output};
//!
//! let executor = Executor::default();
//! let out = executor.execute(Command::AddMember {
//!     kind: MemberKind::Integrated,
//!     name: "Prof. Ana Silva".into(),
//! })?;
//! ```
//!
//! ## Not found vs. errors
//!
//! Looking up or mutating an unknown id is not an error. Lookups answer
//! `MaybeMember(None)` / `MaybeProject(None)`, mutations answer `Bool(false)`
//! and distribution answers `Distribution(None)`. [`Error`] is reserved for
//! rejected input.

#![warn(missing_docs)]

mod command;
mod convert;
mod error;
mod executor;
mod output;
mod types;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API
// =============================================================================

pub use command::Command;
pub use error::Error;
pub use executor::Executor;
pub use output::Output;
pub use types::*;

// Re-export domain types so callers don't need uniag-core directly
pub use uniag_core::{Distribution, MemberId, MemberKind, ProjectId};

// Re-export the registry handle so callers can share it with an executor
pub use uniag_engine::{Registry, SharedRegistry};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
