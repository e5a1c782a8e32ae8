//! Core types for the UNIAG registry
//!
//! This crate defines the domain model the registry is built on:
//! - MemberId / ProjectId: typed identifiers
//! - Sequence: owned, strictly increasing id generator
//! - Member / MemberKind / Role: research-unit members and their variants
//! - Project / Distribution: funded projects and the result of splitting funding
//! - Error: validation failures (`InvalidArgument`)
//!
//! Entities refer to each other by id only. Keeping both sides of an
//! association in step is the registry's job (see `uniag-engine`).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod member;
pub mod project;
pub mod types;
pub mod validation;

pub use error::{Error, Result};
pub use member::{Member, MemberKind, Role};
pub use project::{Distribution, Project};
pub use types::{MemberId, ProjectId, Sequence};
