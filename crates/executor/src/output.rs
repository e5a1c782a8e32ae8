//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant. The mapping is
//! deterministic: the same command always produces the same variant (though
//! the values depend on registry state).

use serde::{Deserialize, Serialize};
use uniag_core::Distribution;

use crate::types::*;

/// Successful command execution results.
///
/// # Example
///
/// ```text
/// use uniag_executor::{Command, Output};
///
/// match executor.execute(Command::GetMember { member })? {
///     Output::MaybeMember(Some(m)) => println!("{}", m.name),
///     Output::MaybeMember(None) => println!("Member not found"),
///     _ => unreachable!("GetMember always returns MaybeMember"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    // ==================== Created ====================
    /// Newly registered member
    Member(MemberInfo),

    /// Newly registered project
    Project(ProjectInfo),

    // ==================== Status ====================
    /// Whether a mutation took effect
    Bool(bool),

    /// Funding outcome; None if the project does not exist
    Distribution(Option<Distribution>),

    // ==================== Collections ====================
    /// All members in id order
    Members(Vec<MemberInfo>),

    /// All projects in id order
    Projects(Vec<ProjectInfo>),

    // ==================== Lookups ====================
    /// Single member, if found
    MaybeMember(Option<MemberInfo>),

    /// Single project with resolved participants, if found
    MaybeProject(Option<ProjectDetail>),
}
