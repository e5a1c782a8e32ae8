//! Core identifier types for the registry
//!
//! This module defines:
//! - MemberId: identifier shared by every member variant
//! - ProjectId: identifier for projects, drawn from its own sequence
//! - Sequence: explicit, owned id generator (one per entity kind)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Unique identifier for a member
///
/// Integrated researchers, collaborators and visitors all draw from the same
/// sequence, so a `MemberId` is unique across every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(u64);

impl MemberId {
    /// Wrap a raw id value
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw id value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for MemberId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(u64);

impl ProjectId {
    /// Wrap a raw id value
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw id value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ProjectId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strictly increasing id generator
///
/// Starts at 1 and never hands out the same value twice. The registry owns
/// one `Sequence<MemberId>` and one `Sequence<ProjectId>`; there is no
/// process-wide counter.
#[derive(Debug, Clone)]
pub struct Sequence<I> {
    next: u64,
    _marker: PhantomData<fn() -> I>,
}

impl<I: From<u64>> Sequence<I> {
    /// Create a sequence whose first id is 1
    pub fn new() -> Self {
        Self {
            next: 1,
            _marker: PhantomData,
        }
    }

    /// Draw the next id
    pub fn next_id(&mut self) -> I {
        let id = self.next;
        self.next += 1;
        I::from(id)
    }

    /// The raw value the next call to [`next_id`](Self::next_id) will return
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl<I: From<u64>> Default for Sequence<I> {
    fn default() -> Self {
        Self::new()
    }
}
