//! Research-unit members
//!
//! A member is one of three variants that share the same record shape:
//!
//! | Variant | Holds a balance |
//! |---------|-----------------|
//! | Integrated researcher | yes, starts at 0 |
//! | Collaborator researcher | no |
//! | Visiting researcher | no |
//!
//! The variant is a tag on [`Role`]; behaviour dispatches on it instead of on
//! a type hierarchy. Associations are stored as [`ProjectId`]s in insertion
//! order and are only changed through [`Member::associate`] and
//! [`Member::disassociate`], which the registry calls in pairs with the
//! project side.

use crate::error::{Error, Result};
use crate::types::{MemberId, ProjectId, Sequence};
use crate::validation::validate_name;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ========== MemberKind ==========

/// Variant tag used when creating a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    /// Integrated researcher, accumulates a funding balance
    Integrated,
    /// Collaborator researcher
    Collaborator,
    /// Visiting researcher
    Visiting,
}

impl MemberKind {
    /// All variants, in menu order
    pub const ALL: [MemberKind; 3] = [
        MemberKind::Integrated,
        MemberKind::Collaborator,
        MemberKind::Visiting,
    ];

    /// Whether members of this variant can receive distributed funding
    pub fn holds_balance(&self) -> bool {
        matches!(self, MemberKind::Integrated)
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            MemberKind::Integrated => "Integrated Researcher",
            MemberKind::Collaborator => "Collaborator Researcher",
            MemberKind::Visiting => "Visiting Researcher",
        }
    }

    /// Short machine name, as accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Integrated => "integrated",
            MemberKind::Collaborator => "collaborator",
            MemberKind::Visiting => "visiting",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MemberKind {
    type Err = Error;

    /// Accepts the machine names and the menu digits `1`, `2`, `3`
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "integrated" => Ok(MemberKind::Integrated),
            "2" | "collaborator" => Ok(MemberKind::Collaborator),
            "3" | "visiting" | "visitor" => Ok(MemberKind::Visiting),
            other => Err(Error::invalid_argument(format!(
                "unknown member kind '{}' (expected integrated, collaborator or visiting)",
                other
            ))),
        }
    }
}

// ========== Role ==========

/// Variant-specific state of a member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Role {
    /// Integrated researcher with its accumulated balance
    Integrated {
        /// Non-negative, only ever increased by deposits
        balance: f64,
    },
    /// Collaborator researcher
    Collaborator,
    /// Visiting researcher
    Visiting,
}

impl Role {
    fn fresh(kind: MemberKind) -> Self {
        match kind {
            MemberKind::Integrated => Role::Integrated { balance: 0.0 },
            MemberKind::Collaborator => Role::Collaborator,
            MemberKind::Visiting => Role::Visiting,
        }
    }

    /// The variant tag
    pub fn kind(&self) -> MemberKind {
        match self {
            Role::Integrated { .. } => MemberKind::Integrated,
            Role::Collaborator => MemberKind::Collaborator,
            Role::Visiting => MemberKind::Visiting,
        }
    }
}

// ========== Member ==========

/// A member of the research unit
///
/// Two members are equal iff they have the same variant and the same id;
/// name, balance and associations do not take part in equality.
///
/// `Clone` gives an independent value with the same id, name, balance and a
/// copy of the association list. The registry never clones members on its
/// mutation paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    name: String,
    #[serde(flatten)]
    role: Role,
    projects: Vec<ProjectId>,
}

impl Member {
    /// Create a member, drawing its id from `ids`
    ///
    /// The name is validated before an id is drawn, so a rejected name does
    /// not consume an id.
    ///
    /// ## Errors
    /// - `InvalidArgument` if `name` is empty or blank
    pub fn new(
        ids: &mut Sequence<MemberId>,
        kind: MemberKind,
        name: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            id: ids.next_id(),
            name,
            role: Role::fresh(kind),
            projects: Vec::new(),
        })
    }

    /// Unique id, assigned at creation
    pub fn id(&self) -> MemberId {
        self.id
    }

    /// Current name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variant tag
    pub fn kind(&self) -> MemberKind {
        self.role.kind()
    }

    /// Variant-specific state
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Accumulated balance, `None` for variants without one
    pub fn balance(&self) -> Option<f64> {
        match self.role {
            Role::Integrated { balance } => Some(balance),
            _ => None,
        }
    }

    /// Whether this member can receive distributed funding
    pub fn holds_balance(&self) -> bool {
        self.kind().holds_balance()
    }

    /// Associated projects, in the order they were associated
    pub fn projects(&self) -> &[ProjectId] {
        &self.projects
    }

    /// Whether this member is associated with `project`
    pub fn is_associated(&self, project: ProjectId) -> bool {
        self.projects.contains(&project)
    }

    /// Replace the name; id and associations are unchanged
    ///
    /// ## Errors
    /// - `InvalidArgument` if `name` is empty or blank (the old name is kept)
    pub fn rename(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Record an association with `project`
    ///
    /// Returns `false` without changing anything if it is already present.
    pub fn associate(&mut self, project: ProjectId) -> bool {
        if self.is_associated(project) {
            return false;
        }
        self.projects.push(project);
        true
    }

    /// Drop the association with `project`
    ///
    /// Returns `false` if it was not present.
    pub fn disassociate(&mut self, project: ProjectId) -> bool {
        match self.projects.iter().position(|p| *p == project) {
            Some(pos) => {
                self.projects.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Add `amount` to the balance
    ///
    /// Returns `false` without changing anything if `amount` is not a
    /// positive finite number, if the new balance would not be finite, or if
    /// this variant holds no balance.
    pub fn deposit(&mut self, amount: f64) -> bool {
        match &mut self.role {
            Role::Integrated { balance } if amount > 0.0 && amount.is_finite() => {
                let total = *balance + amount;
                if !total.is_finite() {
                    return false;
                }
                *balance = total;
                true
            }
            _ => false,
        }
    }

    /// One-line human-readable summary
    ///
    /// Includes id, name, variant label and, for integrated researchers,
    /// the balance with two decimals.
    pub fn describe(&self) -> String {
        let mut out = format!(
            "ID: {} | Name: {} | Type: {}",
            self.id,
            self.name,
            self.kind().label()
        );
        if let Some(balance) = self.balance() {
            out.push_str(&format!(" | Balance: {:.2}", balance));
        }
        out
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.id == other.id
    }
}

impl Eq for Member {}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
