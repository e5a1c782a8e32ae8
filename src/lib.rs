//! UNIAG - in-memory registry of research-unit members and funded projects
//!
//! Members (integrated, collaborator or visiting researchers) and projects
//! are linked many-to-many. A project's funding can be split evenly among its
//! integrated researchers, who are the only members that hold a balance.
//!
//! # Quick Start
//!
//! ```ignore
//! use uniag::{Command, Executor, MemberKind, Output};
//!
//! let executor = Executor::default();
//! executor.execute(Command::AddMember {
//!     kind: MemberKind::Integrated,
//!     name: "Prof. Ana Silva".into(),
//! })?;
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which dispatches [`Command`]s
//! against a [`SharedRegistry`]. The registry keeps both sides of every
//! association in step; callers never touch the links directly.

// Re-export the public API from uniag-executor
pub use uniag_executor::*;
