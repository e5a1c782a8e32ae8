//! Conversions from domain types to executor types.
//!
//! - `uniag_core::Error` into the executor's [`Error`]
//! - registry entities into the owned views in [`crate::types`]

use uniag_core::{Member, Project};

use crate::types::{MemberInfo, ProjectDetail, ProjectInfo};
use crate::Error;

impl From<uniag_core::Error> for Error {
    fn from(err: uniag_core::Error) -> Self {
        match err {
            uniag_core::Error::InvalidArgument(reason) => Error::InvalidArgument { reason },
        }
    }
}

impl From<&Member> for MemberInfo {
    fn from(member: &Member) -> Self {
        MemberInfo {
            id: member.id(),
            name: member.name().to_string(),
            kind: member.kind(),
            balance: member.balance(),
            projects: member.projects().to_vec(),
        }
    }
}

impl From<&Project> for ProjectInfo {
    fn from(project: &Project) -> Self {
        ProjectInfo {
            id: project.id(),
            title: project.title().to_string(),
            funding: project.funding(),
            participants: project.participants().to_vec(),
        }
    }
}

impl ProjectDetail {
    pub(crate) fn new(project: &Project, members: &[Member]) -> Self {
        ProjectDetail {
            project: ProjectInfo::from(project),
            members: members.iter().map(MemberInfo::from).collect(),
        }
    }
}
