//! Registry: owner of every member and project
//!
//! ## Design Principles
//!
//! 1. **Single mutation entry point**: members and projects are only changed
//!    through registry operations once they are registered.
//! 2. **Mirrored associations**: a member lists a project iff the project
//!    lists the member. Every public operation leaves this true.
//! 3. **Cascading removal**: removing an entity first unlinks it from every
//!    counterpart, then drops it. Nothing on these paths can fail halfway.
//! 4. **Not found is not an error**: lookups return `Option`, mutations
//!    return `bool` (or `Result<bool>` when input validation can also fail).
//!
//! ## Storage
//!
//! Both entity kinds live in `BTreeMap`s keyed by id. Ids are drawn from
//! strictly increasing sequences owned by the registry, so key order is
//! insertion order and listings are deterministic.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};
use uniag_core::{
    Distribution, Member, MemberId, MemberKind, Project, ProjectId, Result, Sequence,
};

/// In-memory registry of members and projects
///
/// ## Example
///
/// ```
/// use uniag_core::MemberKind;
/// use uniag_engine::Registry;
///
/// let mut registry = Registry::new();
/// let ana = registry.add_member(MemberKind::Integrated, "Ana").unwrap().id();
/// let energy = registry.add_project("Energy", 50_000.0).unwrap().id();
///
/// assert!(registry.associate(ana, energy));
/// registry.distribute_funding(energy);
/// assert_eq!(registry.find_member(ana).unwrap().balance(), Some(50_000.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    members: BTreeMap<MemberId, Member>,
    projects: BTreeMap<ProjectId, Project>,
    member_ids: Sequence<MemberId>,
    project_ids: Sequence<ProjectId>,
}

impl Registry {
    /// Create an empty registry; the first member and project both get id 1
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Create ==========

    /// Create and register a member of the given variant
    ///
    /// ## Errors
    /// - `InvalidArgument` if `name` is empty or blank (no id is consumed)
    pub fn add_member(&mut self, kind: MemberKind, name: impl Into<String>) -> Result<&Member> {
        let member = Member::new(&mut self.member_ids, kind, name)?;
        let id = member.id();
        debug!(target: "uniag::registry", member = %id, kind = kind.as_str(), "Member registered");
        Ok(self.members.entry(id).or_insert(member))
    }

    /// Create and register a project
    ///
    /// ## Errors
    /// - `InvalidArgument` if `title` is blank or `funding` is negative / not finite
    pub fn add_project(&mut self, title: impl Into<String>, funding: f64) -> Result<&Project> {
        let project = Project::new(&mut self.project_ids, title, funding)?;
        let id = project.id();
        debug!(target: "uniag::registry", project = %id, funding, "Project registered");
        Ok(self.projects.entry(id).or_insert(project))
    }

    // ========== Read ==========

    /// Look up a member
    pub fn find_member(&self, id: MemberId) -> Option<&Member> {
        self.members.get(&id)
    }

    /// Look up a project
    pub fn find_project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(&id)
    }

    /// All members in insertion order
    pub fn list_members(&self) -> impl ExactSizeIterator<Item = &Member> + '_ {
        self.members.values()
    }

    /// All projects in insertion order
    pub fn list_projects(&self) -> impl ExactSizeIterator<Item = &Project> + '_ {
        self.projects.values()
    }

    /// Number of registered members
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Number of registered projects
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    /// Participants of a project, resolved, in the order they joined
    ///
    /// Returns `None` if the project does not exist.
    pub fn participants(&self, project: ProjectId) -> Option<Vec<&Member>> {
        let project = self.projects.get(&project)?;
        Some(
            project
                .participants()
                .iter()
                .filter_map(|id| self.members.get(id))
                .collect(),
        )
    }

    /// Projects a member is associated with, resolved, in association order
    ///
    /// Returns `None` if the member does not exist.
    pub fn projects_of(&self, member: MemberId) -> Option<Vec<&Project>> {
        let member = self.members.get(&member)?;
        Some(
            member
                .projects()
                .iter()
                .filter_map(|id| self.projects.get(id))
                .collect(),
        )
    }

    /// Full multi-line description of a project and its participants
    pub fn describe_project(&self, project: ProjectId) -> Option<String> {
        let participants = self.participants(project)?;
        self.projects
            .get(&project)
            .map(|p| p.describe(participants))
    }

    // ========== Associations ==========

    /// Link a member and a project on both sides
    ///
    /// Both sides are always attempted so a half-linked pair gets repaired.
    /// Returns `true` only if both sides were newly linked; re-associating an
    /// already linked pair returns `false` and changes nothing. Unresolved ids
    /// return `false`.
    pub fn associate(&mut self, member: MemberId, project: ProjectId) -> bool {
        let (Some(m), Some(p)) = (self.members.get_mut(&member), self.projects.get_mut(&project))
        else {
            debug!(target: "uniag::registry", member = %member, project = %project, "Associate: id not found");
            return false;
        };

        let joined = p.add_participant(member);
        let linked = m.associate(project);

        if joined && linked {
            info!(target: "uniag::registry", member = %member, project = %project, "Member associated with project");
        }
        self.debug_check();
        joined && linked
    }

    /// Remove the link between a member and a project on both sides
    ///
    /// Returns `true` only if both sides held the link. Unresolved ids
    /// return `false`.
    pub fn disassociate(&mut self, member: MemberId, project: ProjectId) -> bool {
        let (Some(m), Some(p)) = (self.members.get_mut(&member), self.projects.get_mut(&project))
        else {
            return false;
        };

        let left = p.remove_participant(member);
        let unlinked = m.disassociate(project);

        if left && unlinked {
            info!(target: "uniag::registry", member = %member, project = %project, "Member disassociated from project");
        }
        self.debug_check();
        left && unlinked
    }

    // ========== Update ==========

    /// Rename a member
    ///
    /// ## Returns
    /// - `Ok(true)` if renamed
    /// - `Ok(false)` if the member does not exist
    ///
    /// ## Errors
    /// - `InvalidArgument` if `name` is empty or blank
    pub fn rename_member(&mut self, id: MemberId, name: impl Into<String>) -> Result<bool> {
        match self.members.get_mut(&id) {
            Some(member) => member.rename(name).map(|()| true),
            None => Ok(false),
        }
    }

    /// Change a project's title
    ///
    /// Same return convention as [`rename_member`](Self::rename_member).
    pub fn set_project_title(&mut self, id: ProjectId, title: impl Into<String>) -> Result<bool> {
        match self.projects.get_mut(&id) {
            Some(project) => project.set_title(title).map(|()| true),
            None => Ok(false),
        }
    }

    /// Change a project's funding
    ///
    /// Same return convention as [`rename_member`](Self::rename_member).
    pub fn set_project_funding(&mut self, id: ProjectId, funding: f64) -> Result<bool> {
        match self.projects.get_mut(&id) {
            Some(project) => project.set_funding(funding).map(|()| true),
            None => Ok(false),
        }
    }

    // ========== Delete ==========

    /// Remove a member, unlinking it from every project first
    ///
    /// Returns `false` if the member does not exist.
    pub fn remove_member(&mut self, id: MemberId) -> bool {
        let Some(member) = self.members.get(&id) else {
            return false;
        };

        // Snapshot: the association list is not touched while unlinking.
        let linked: Vec<ProjectId> = member.projects().to_vec();
        for project in &linked {
            if let Some(p) = self.projects.get_mut(project) {
                p.remove_participant(id);
            }
        }
        self.members.remove(&id);

        info!(target: "uniag::registry", member = %id, unlinked = linked.len(), "Member removed");
        self.debug_check();
        true
    }

    /// Remove a project, unlinking it from every participant first
    ///
    /// Returns `false` if the project does not exist.
    pub fn remove_project(&mut self, id: ProjectId) -> bool {
        let Some(project) = self.projects.get(&id) else {
            return false;
        };

        let linked: Vec<MemberId> = project.participants().to_vec();
        for member in &linked {
            if let Some(m) = self.members.get_mut(member) {
                m.disassociate(id);
            }
        }
        self.projects.remove(&id);

        info!(target: "uniag::registry", project = %id, unlinked = linked.len(), "Project removed");
        self.debug_check();
        true
    }

    // ========== Funding ==========

    /// Split a project's funding across its integrated researchers
    ///
    /// ## Returns
    /// - `None` if the project does not exist
    /// - `Some(Distribution::NoEligibleRecipients)` if no participant can
    ///   hold a balance (nothing changes)
    /// - `Some(Distribution::Distributed { .. })` otherwise
    ///
    /// Funding is not consumed; repeating the call credits everyone again.
    pub fn distribute_funding(&mut self, id: ProjectId) -> Option<Distribution> {
        let project = self.projects.get(&id)?;
        let outcome = project.distribute_funding(self.members.values_mut());

        match outcome {
            Distribution::Distributed {
                recipients, share, ..
            } => {
                info!(target: "uniag::registry", project = %id, recipients, share, "Funding distributed");
            }
            Distribution::NoEligibleRecipients => {
                warn!(target: "uniag::registry", project = %id, "Project has no integrated researchers to fund");
            }
        }
        Some(outcome)
    }

    // ========== Consistency ==========

    /// Verify that every association is mirrored and resolvable
    ///
    /// Returns every violation found, not just the first.
    pub fn check_consistency(&self) -> std::result::Result<(), Vec<String>> {
        let mut problems = Vec::new();

        for member in self.members.values() {
            for pid in member.projects() {
                match self.projects.get(pid) {
                    None => problems.push(format!(
                        "member {} references missing project {}",
                        member.id(),
                        pid
                    )),
                    Some(p) if !p.has_participant(member.id()) => problems.push(format!(
                        "member {} lists project {} but the project does not list the member",
                        member.id(),
                        pid
                    )),
                    Some(_) => {}
                }
            }
        }

        for project in self.projects.values() {
            for mid in project.participants() {
                match self.members.get(mid) {
                    None => problems.push(format!(
                        "project {} references missing member {}",
                        project.id(),
                        mid
                    )),
                    Some(m) if !m.is_associated(project.id()) => problems.push(format!(
                        "project {} lists member {} but the member does not list the project",
                        project.id(),
                        mid
                    )),
                    Some(_) => {}
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert!(
            self.check_consistency().is_ok(),
            "registry associations out of sync: {:?}",
            self.check_consistency()
        );
    }
}
