//! Thread-safe handle over a [`Registry`]
//!
//! One `RwLock` guards both maps, so a bidirectional association or a
//! cascading removal is applied under a single write lock and is never
//! observed half-done. There is no per-entity locking and therefore no lock
//! ordering to get wrong.
//!
//! Handles are cheap to clone and all clones share the same registry.

use std::sync::Arc;

use parking_lot::RwLock;
use uniag_core::{Distribution, Member, MemberId, MemberKind, Project, ProjectId, Result};

use crate::Registry;

/// Shared, lock-guarded registry
///
/// Accessors return owned copies since references cannot outlive the lock.
/// Use [`read`](Self::read) / [`write`](Self::write) to run several steps
/// under one lock acquisition.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<Registry>>,
}

impl SharedRegistry {
    /// Create a handle over an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing registry
    pub fn from_registry(registry: Registry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Run `f` with shared access
    pub fn read<R>(&self, f: impl FnOnce(&Registry) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` with exclusive access
    ///
    /// Everything `f` does is visible to other handles atomically once it
    /// returns.
    pub fn write<R>(&self, f: impl FnOnce(&mut Registry) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Independent copy of the current state
    pub fn snapshot(&self) -> Registry {
        self.inner.read().clone()
    }

    /// See [`Registry::add_member`]
    pub fn add_member(&self, kind: MemberKind, name: impl Into<String>) -> Result<Member> {
        self.write(|r| r.add_member(kind, name).cloned())
    }

    /// See [`Registry::add_project`]
    pub fn add_project(&self, title: impl Into<String>, funding: f64) -> Result<Project> {
        self.write(|r| r.add_project(title, funding).cloned())
    }

    /// See [`Registry::find_member`]
    pub fn find_member(&self, id: MemberId) -> Option<Member> {
        self.read(|r| r.find_member(id).cloned())
    }

    /// See [`Registry::find_project`]
    pub fn find_project(&self, id: ProjectId) -> Option<Project> {
        self.read(|r| r.find_project(id).cloned())
    }

    /// A project together with its resolved participants, read under one lock
    pub fn project_with_participants(&self, id: ProjectId) -> Option<(Project, Vec<Member>)> {
        self.read(|r| {
            let project = r.find_project(id)?.clone();
            let members = r
                .participants(id)?
                .into_iter()
                .cloned()
                .collect();
            Some((project, members))
        })
    }

    /// See [`Registry::list_members`]
    pub fn list_members(&self) -> Vec<Member> {
        self.read(|r| r.list_members().cloned().collect())
    }

    /// See [`Registry::list_projects`]
    pub fn list_projects(&self) -> Vec<Project> {
        self.read(|r| r.list_projects().cloned().collect())
    }

    /// See [`Registry::associate`]
    pub fn associate(&self, member: MemberId, project: ProjectId) -> bool {
        self.write(|r| r.associate(member, project))
    }

    /// See [`Registry::disassociate`]
    pub fn disassociate(&self, member: MemberId, project: ProjectId) -> bool {
        self.write(|r| r.disassociate(member, project))
    }

    /// See [`Registry::rename_member`]
    pub fn rename_member(&self, id: MemberId, name: impl Into<String>) -> Result<bool> {
        self.write(|r| r.rename_member(id, name))
    }

    /// See [`Registry::set_project_title`]
    pub fn set_project_title(&self, id: ProjectId, title: impl Into<String>) -> Result<bool> {
        self.write(|r| r.set_project_title(id, title))
    }

    /// See [`Registry::set_project_funding`]
    pub fn set_project_funding(&self, id: ProjectId, funding: f64) -> Result<bool> {
        self.write(|r| r.set_project_funding(id, funding))
    }

    /// See [`Registry::remove_member`]
    pub fn remove_member(&self, id: MemberId) -> bool {
        self.write(|r| r.remove_member(id))
    }

    /// See [`Registry::remove_project`]
    pub fn remove_project(&self, id: ProjectId) -> bool {
        self.write(|r| r.remove_project(id))
    }

    /// See [`Registry::distribute_funding`]
    pub fn distribute_funding(&self, id: ProjectId) -> Option<Distribution> {
        self.write(|r| r.distribute_funding(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let a = SharedRegistry::new();
        let b = a.clone();
        let id = a.add_member(MemberKind::Integrated, "Ana").unwrap().id();
        assert_eq!(b.find_member(id).unwrap().name(), "Ana");
    }

    #[test]
    fn test_snapshot_is_independent() {
        let shared = SharedRegistry::new();
        shared.add_project("Energy", 1.0).unwrap();
        let snapshot = shared.snapshot();
        shared.add_project("Data", 2.0).unwrap();
        assert_eq!(snapshot.project_count(), 1);
        assert_eq!(shared.read(|r| r.project_count()), 2);
    }

    #[test]
    fn test_project_with_participants() {
        let shared = SharedRegistry::new();
        let m = shared.add_member(MemberKind::Visiting, "John").unwrap().id();
        let p = shared.add_project("Energy", 1.0).unwrap().id();
        shared.associate(m, p);

        let (project, members) = shared.project_with_participants(p).unwrap();
        assert_eq!(project.title(), "Energy");
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name(), "John");
        assert!(shared.project_with_participants(ProjectId::new(5)).is_none());
    }
}
