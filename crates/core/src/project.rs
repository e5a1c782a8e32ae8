//! Funded research projects
//!
//! A project holds a title, a funding amount and its participants as
//! [`MemberId`]s in insertion order. It never owns members: operations that
//! need member state (distribution, full description) take the resolved
//! members as arguments.
//!
//! ## Distribution semantics
//!
//! `funding` is a rate, not a pool. [`Project::distribute_funding`] splits
//! the full amount evenly across eligible participants every time it is
//! called and leaves `funding` untouched, so calling it twice credits each
//! recipient twice.

use crate::error::Result;
use crate::member::Member;
use crate::types::{MemberId, ProjectId, Sequence};
use crate::validation::{validate_funding, validate_title};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a funding distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Distribution {
    /// Funding was split across eligible participants
    Distributed {
        /// Number of eligible participants the funding was split across
        recipients: usize,
        /// Amount deposited into each recipient
        share: f64,
        /// Funding amount that was split
        total: f64,
    },
    /// No participant can hold a balance; nothing changed
    NoEligibleRecipients,
}

impl Distribution {
    /// Whether any balance was credited
    pub fn is_distributed(&self) -> bool {
        matches!(self, Distribution::Distributed { .. })
    }
}

/// A funded research project
///
/// Two projects are equal iff they have the same id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    funding: f64,
    participants: Vec<MemberId>,
}

impl Project {
    /// Create a project, drawing its id from `ids`
    ///
    /// Inputs are validated before an id is drawn.
    ///
    /// ## Errors
    /// - `InvalidArgument` if `title` is empty or blank
    /// - `InvalidArgument` if `funding` is negative or not finite
    pub fn new(
        ids: &mut Sequence<ProjectId>,
        title: impl Into<String>,
        funding: f64,
    ) -> Result<Self> {
        let title = title.into();
        validate_title(&title)?;
        validate_funding(funding)?;
        Ok(Self {
            id: ids.next_id(),
            title,
            funding,
            participants: Vec::new(),
        })
    }

    /// Unique id, assigned at creation
    pub fn id(&self) -> ProjectId {
        self.id
    }

    /// Current title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current funding amount
    pub fn funding(&self) -> f64 {
        self.funding
    }

    /// Participants, in the order they joined
    pub fn participants(&self) -> &[MemberId] {
        &self.participants
    }

    /// Whether `member` participates in this project
    pub fn has_participant(&self, member: MemberId) -> bool {
        self.participants.contains(&member)
    }

    /// Replace the title
    ///
    /// ## Errors
    /// - `InvalidArgument` if `title` is empty or blank (the old title is kept)
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    /// Replace the funding amount
    ///
    /// ## Errors
    /// - `InvalidArgument` if `funding` is negative or not finite
    pub fn set_funding(&mut self, funding: f64) -> Result<()> {
        validate_funding(funding)?;
        self.funding = funding;
        Ok(())
    }

    /// Add `member` to the participants
    ///
    /// Returns `false` without changing anything if already present.
    pub fn add_participant(&mut self, member: MemberId) -> bool {
        if self.has_participant(member) {
            return false;
        }
        self.participants.push(member);
        true
    }

    /// Remove `member` from the participants
    ///
    /// Returns `false` if it was not present.
    pub fn remove_participant(&mut self, member: MemberId) -> bool {
        match self.participants.iter().position(|m| *m == member) {
            Some(pos) => {
                self.participants.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Split `funding` evenly across participants that can hold a balance
    ///
    /// `members` is any collection of members; only those listed as
    /// participants of this project and able to hold a balance are credited.
    /// Funding itself is not reduced.
    pub fn distribute_funding<'a, I>(&self, members: I) -> Distribution
    where
        I: IntoIterator<Item = &'a mut Member>,
    {
        let mut recipients: Vec<&mut Member> = members
            .into_iter()
            .filter(|m| m.holds_balance() && self.has_participant(m.id()))
            .collect();

        if recipients.is_empty() {
            return Distribution::NoEligibleRecipients;
        }

        let share = self.funding / recipients.len() as f64;
        for member in recipients.iter_mut() {
            member.deposit(share);
        }

        Distribution::Distributed {
            recipients: recipients.len(),
            share,
            total: self.funding,
        }
    }

    /// Multi-line description with every participant's summary
    ///
    /// `participants` should be this project's members, already resolved.
    pub fn describe<'a, I>(&self, participants: I) -> String
    where
        I: IntoIterator<Item = &'a Member>,
    {
        let lines: Vec<String> = participants
            .into_iter()
            .map(|m| format!("  -> {}", m.describe()))
            .collect();

        let mut out = String::new();
        out.push_str(&format!("Project ID: {}\n", self.id));
        out.push_str(&format!("Title: {}\n", self.title));
        out.push_str(&format!("Funding: {:.2}\n", self.funding));
        out.push_str(&format!("Participants ({}):", lines.len()));
        if lines.is_empty() {
            out.push_str("\n  (no members associated yet)");
        }
        for line in lines {
            out.push('\n');
            out.push_str(&line);
        }
        out
    }
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Project {}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Project {}: {} ({:.2})", self.id, self.title, self.funding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::member::MemberKind;

    fn member(ids: &mut Sequence<MemberId>, kind: MemberKind, name: &str) -> Member {
        Member::new(ids, kind, name).unwrap()
    }

    #[test]
    fn test_new_validates_title_and_funding() {
        let mut ids: Sequence<ProjectId> = Sequence::new();
        assert!(matches!(
            Project::new(&mut ids, "", 100.0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Project::new(&mut ids, "T", -1.0),
            Err(Error::InvalidArgument(_))
        ));
        let p = Project::new(&mut ids, "T", 0.0).unwrap();
        assert_eq!(p.id(), ProjectId::new(1));
        assert_eq!(p.funding(), 0.0);
    }

    #[test]
    fn test_setters_validate_and_keep_old_values() {
        let mut ids: Sequence<ProjectId> = Sequence::new();
        let mut p = Project::new(&mut ids, "Energy", 10.0).unwrap();
        assert!(p.set_title("  ").is_err());
        assert!(p.set_funding(-3.0).is_err());
        assert_eq!(p.title(), "Energy");
        assert_eq!(p.funding(), 10.0);

        p.set_title("Energy II").unwrap();
        p.set_funding(20.0).unwrap();
        assert_eq!(p.title(), "Energy II");
        assert_eq!(p.funding(), 20.0);
    }

    #[test]
    fn test_participants_ordered_and_deduplicated() {
        let mut ids: Sequence<ProjectId> = Sequence::new();
        let mut p = Project::new(&mut ids, "Energy", 10.0).unwrap();
        assert!(p.add_participant(MemberId::new(3)));
        assert!(p.add_participant(MemberId::new(1)));
        assert!(!p.add_participant(MemberId::new(3)));
        assert_eq!(p.participants(), &[MemberId::new(3), MemberId::new(1)]);

        assert!(p.remove_participant(MemberId::new(3)));
        assert!(!p.remove_participant(MemberId::new(3)));
        assert_eq!(p.participants(), &[MemberId::new(1)]);
    }

    #[test]
    fn test_distribute_splits_evenly_among_integrated() {
        let mut mids: Sequence<MemberId> = Sequence::new();
        let mut pids: Sequence<ProjectId> = Sequence::new();
        let mut ana = member(&mut mids, MemberKind::Integrated, "Ana");
        let mut rui = member(&mut mids, MemberKind::Integrated, "Rui");
        let mut carlos = member(&mut mids, MemberKind::Collaborator, "Carlos");

        let mut p = Project::new(&mut pids, "Energy", 50_000.0).unwrap();
        for m in [&ana, &rui, &carlos] {
            p.add_participant(m.id());
        }

        let outcome = p.distribute_funding([&mut ana, &mut rui, &mut carlos]);
        assert_eq!(
            outcome,
            Distribution::Distributed {
                recipients: 2,
                share: 25_000.0,
                total: 50_000.0
            }
        );
        assert_eq!(ana.balance(), Some(25_000.0));
        assert_eq!(rui.balance(), Some(25_000.0));
        assert_eq!(carlos.balance(), None);
        assert_eq!(p.funding(), 50_000.0);
    }

    #[test]
    fn test_distribute_is_not_idempotent() {
        let mut mids: Sequence<MemberId> = Sequence::new();
        let mut pids: Sequence<ProjectId> = Sequence::new();
        let mut ana = member(&mut mids, MemberKind::Integrated, "Ana");
        let mut p = Project::new(&mut pids, "Energy", 300.0).unwrap();
        p.add_participant(ana.id());

        p.distribute_funding([&mut ana]);
        p.distribute_funding([&mut ana]);
        assert_eq!(ana.balance(), Some(600.0));
    }

    #[test]
    fn test_distribute_without_eligible_recipients() {
        let mut mids: Sequence<MemberId> = Sequence::new();
        let mut pids: Sequence<ProjectId> = Sequence::new();
        let mut john = member(&mut mids, MemberKind::Visiting, "John");
        let mut p = Project::new(&mut pids, "Energy", 300.0).unwrap();
        p.add_participant(john.id());

        let outcome = p.distribute_funding([&mut john]);
        assert_eq!(outcome, Distribution::NoEligibleRecipients);
        assert!(!outcome.is_distributed());
        assert_eq!(p.funding(), 300.0);
    }

    #[test]
    fn test_distribute_skips_non_participants() {
        let mut mids: Sequence<MemberId> = Sequence::new();
        let mut pids: Sequence<ProjectId> = Sequence::new();
        let mut ana = member(&mut mids, MemberKind::Integrated, "Ana");
        let mut outsider = member(&mut mids, MemberKind::Integrated, "Outsider");
        let mut p = Project::new(&mut pids, "Energy", 100.0).unwrap();
        p.add_participant(ana.id());

        p.distribute_funding([&mut ana, &mut outsider]);
        assert_eq!(ana.balance(), Some(100.0));
        assert_eq!(outsider.balance(), Some(0.0));
    }

    #[test]
    fn test_equality_is_id_only() {
        let mut ids: Sequence<ProjectId> = Sequence::new();
        let a = Project::new(&mut ids, "A", 1.0).unwrap();
        let mut a2 = a.clone();
        a2.set_title("Renamed").unwrap();
        let b = Project::new(&mut ids, "A", 1.0).unwrap();
        assert_eq!(a, a2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_describe_lists_participants() {
        let mut mids: Sequence<MemberId> = Sequence::new();
        let mut pids: Sequence<ProjectId> = Sequence::new();
        let ana = member(&mut mids, MemberKind::Integrated, "Ana");
        let mut p = Project::new(&mut pids, "Energy", 50_000.0).unwrap();
        p.add_participant(ana.id());

        let text = p.describe([&ana]);
        assert!(text.contains("Project ID: 1"));
        assert!(text.contains("Title: Energy"));
        assert!(text.contains("Funding: 50000.00"));
        assert!(text.contains("Participants (1)"));
        assert!(text.contains("  -> ID: 1 | Name: Ana"));

        let empty = Project::new(&mut pids, "Empty", 0.0).unwrap();
        assert!(empty.describe(Vec::<&Member>::new()).contains("no members associated"));
    }

    #[test]
    fn test_display_is_concise() {
        let mut ids: Sequence<ProjectId> = Sequence::new();
        let p = Project::new(&mut ids, "Energy", 1234.5).unwrap();
        assert_eq!(p.to_string(), "Project 1: Energy (1234.50)");
    }
}
