//! Association and funding command handlers.

use uniag_core::{MemberId, ProjectId};
use uniag_engine::SharedRegistry;

use crate::{Output, Result};

/// Handle Associate command.
pub fn associate(r: &SharedRegistry, member: MemberId, project: ProjectId) -> Result<Output> {
    Ok(Output::Bool(r.associate(member, project)))
}

/// Handle Disassociate command.
pub fn disassociate(r: &SharedRegistry, member: MemberId, project: ProjectId) -> Result<Output> {
    Ok(Output::Bool(r.disassociate(member, project)))
}

/// Handle DistributeFunding command.
pub fn distribute_funding(r: &SharedRegistry, project: ProjectId) -> Result<Output> {
    Ok(Output::Distribution(r.distribute_funding(project)))
}
