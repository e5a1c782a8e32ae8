//! Command enum defining all registry operations.
//!
//! Every operation that can be performed on the registry is represented as a
//! variant of this enum. Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON
//! - **Pure data**: No closures or executable code

use serde::{Deserialize, Serialize};
use uniag_core::{MemberId, MemberKind, ProjectId};

/// A command is a self-contained, serializable operation.
///
/// # Command Categories
///
/// | Category | Count | Description |
/// |----------|-------|-------------|
/// | Member | 5 | Register, read, rename, remove members |
/// | Project | 6 | Register, read, edit, remove projects |
/// | Association | 2 | Link and unlink a member and a project |
/// | Funding | 1 | Split a project's funding |
///
/// # Example
///
/// ```ignore
/// use uniag_executor::{Command, MemberKind};
///
/// let cmd = Command::AddMember {
///     kind: MemberKind::Integrated,
///     name: "Prof. Ana Silva".into(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Member (5) ====================
    /// Register a new member.
    /// Returns: `Output::Member`
    AddMember {
        /// Category of the new member
        kind: MemberKind,
        /// Display name; must not be blank
        name: String,
    },

    /// List all members in id order.
    /// Returns: `Output::Members`
    ListMembers,

    /// Look up a member.
    /// Returns: `Output::MaybeMember`
    GetMember {
        /// Member to look up
        member: MemberId,
    },

    /// Change a member's name.
    /// Returns: `Output::Bool` (false if the member does not exist)
    RenameMember {
        /// Member to rename
        member: MemberId,
        /// New name; must not be blank
        name: String,
    },

    /// Remove a member and unlink it from every project.
    /// Returns: `Output::Bool` (true if the member existed)
    RemoveMember {
        /// Member to remove
        member: MemberId,
    },

    // ==================== Project (6) ====================
    /// Register a new project.
    /// Returns: `Output::Project`
    AddProject {
        /// Title; must not be blank
        title: String,
        /// Funding; must be finite and not negative
        funding: f64,
    },

    /// List all projects in id order.
    /// Returns: `Output::Projects`
    ListProjects,

    /// Look up a project with its participants resolved.
    /// Returns: `Output::MaybeProject`
    GetProject {
        /// Project to look up
        project: ProjectId,
    },

    /// Change a project's title.
    /// Returns: `Output::Bool` (false if the project does not exist)
    SetProjectTitle {
        /// Project to edit
        project: ProjectId,
        /// New title; must not be blank
        title: String,
    },

    /// Change a project's funding.
    /// Returns: `Output::Bool` (false if the project does not exist)
    SetProjectFunding {
        /// Project to edit
        project: ProjectId,
        /// New funding; must be finite and not negative
        funding: f64,
    },

    /// Remove a project and unlink it from every participant.
    /// Returns: `Output::Bool` (true if the project existed)
    RemoveProject {
        /// Project to remove
        project: ProjectId,
    },

    // ==================== Association (2) ====================
    /// Link a member and a project in both directions.
    /// Returns: `Output::Bool` (false if either is missing or already linked)
    Associate {
        /// Member side
        member: MemberId,
        /// Project side
        project: ProjectId,
    },

    /// Remove the link between a member and a project.
    /// Returns: `Output::Bool` (false if either is missing or not linked)
    Disassociate {
        /// Member side
        member: MemberId,
        /// Project side
        project: ProjectId,
    },

    // ==================== Funding (1) ====================
    /// Split a project's funding among its integrated researchers.
    /// Returns: `Output::Distribution` (None if the project does not exist)
    DistributeFunding {
        /// Project whose funding is split
        project: ProjectId,
    },
}

impl Command {
    /// Variant name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddMember { .. } => "AddMember",
            Command::ListMembers => "ListMembers",
            Command::GetMember { .. } => "GetMember",
            Command::RenameMember { .. } => "RenameMember",
            Command::RemoveMember { .. } => "RemoveMember",
            Command::AddProject { .. } => "AddProject",
            Command::ListProjects => "ListProjects",
            Command::GetProject { .. } => "GetProject",
            Command::SetProjectTitle { .. } => "SetProjectTitle",
            Command::SetProjectFunding { .. } => "SetProjectFunding",
            Command::RemoveProject { .. } => "RemoveProject",
            Command::Associate { .. } => "Associate",
            Command::Disassociate { .. } => "Disassociate",
            Command::DistributeFunding { .. } => "DistributeFunding",
        }
    }

    /// Whether executing this command can change registry state.
    pub fn is_write(&self) -> bool {
        !matches!(
            self,
            Command::ListMembers
                | Command::GetMember { .. }
                | Command::ListProjects
                | Command::GetProject { .. }
        )
    }
}
