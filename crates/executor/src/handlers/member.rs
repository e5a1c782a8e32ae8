//! Member command handlers.

use uniag_core::{MemberId, MemberKind};
use uniag_engine::SharedRegistry;

use crate::types::MemberInfo;
use crate::{Output, Result};

/// Handle AddMember command.
pub fn add_member(r: &SharedRegistry, kind: MemberKind, name: String) -> Result<Output> {
    let member = r.add_member(kind, name)?;
    Ok(Output::Member(MemberInfo::from(&member)))
}

/// Handle ListMembers command.
pub fn list_members(r: &SharedRegistry) -> Result<Output> {
    let members: Vec<MemberInfo> =
        r.read(|reg| reg.list_members().map(MemberInfo::from).collect());
    Ok(Output::Members(members))
}

/// Handle GetMember command.
pub fn get_member(r: &SharedRegistry, member: MemberId) -> Result<Output> {
    let found = r.read(|reg| reg.find_member(member).map(MemberInfo::from));
    Ok(Output::MaybeMember(found))
}

/// Handle RenameMember command.
pub fn rename_member(r: &SharedRegistry, member: MemberId, name: String) -> Result<Output> {
    Ok(Output::Bool(r.rename_member(member, name)?))
}

/// Handle RemoveMember command.
pub fn remove_member(r: &SharedRegistry, member: MemberId) -> Result<Output> {
    Ok(Output::Bool(r.remove_member(member)))
}
