//! Owned views of registry entities carried in [`Output`](crate::Output).
//!
//! These are detached copies: holding one does not keep any lock and later
//! registry changes are not reflected in it.

use serde::{Deserialize, Serialize};
use uniag_core::{MemberId, MemberKind, ProjectId};

/// A member as seen by callers of the executor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberInfo {
    /// Member id
    pub id: MemberId,
    /// Display name
    pub name: String,
    /// Category
    pub kind: MemberKind,
    /// Accumulated balance; only integrated researchers have one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    /// Associated projects in association order
    pub projects: Vec<ProjectId>,
}

/// A project as seen by callers of the executor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// Project id
    pub id: ProjectId,
    /// Title
    pub title: String,
    /// Funding amount
    pub funding: f64,
    /// Participant ids in association order
    pub participants: Vec<MemberId>,
}

/// A project together with its participants resolved to members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetail {
    /// The project itself
    pub project: ProjectInfo,
    /// Participants in association order
    pub members: Vec<MemberInfo>,
}
