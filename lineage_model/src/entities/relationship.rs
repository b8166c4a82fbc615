//! Relationship records between two people.

use serde::{Deserialize, Serialize};

use super::{PersonId, RelationshipId};

/// Kinds of recorded relationships.
///
/// Any unknown or missing type in stored data deserializes to `Unrecognized`
/// so that a single bad record never prevents a snapshot from loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipKind {
    /// `person1` is the parent of `person2`.
    Parent,
    AdoptedParent,
    FosterParent,
    Spouse,
    Twin,
    Mentor,
    NamedAfter,
    /// `person1` is an ancestor of `person2` at an unknown distance.
    LineageGap,
    #[default]
    #[serde(other)]
    Unrecognized,
}

/// State of a spousal union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarriageStatus {
    Betrothed,
    Married,
    Divorced,
    Widowed,
}

/// A flat relationship record as kept by the relationship store.
///
/// Both person IDs are optional: stored data is allowed to be incomplete and
/// consumers decide what to do with partial records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    #[serde(default)]
    pub id: RelationshipId,
    #[serde(default)]
    pub person1_id: Option<PersonId>,
    #[serde(default)]
    pub person2_id: Option<PersonId>,
    #[serde(default)]
    pub relationship_type: RelationshipKind,
    #[serde(default)]
    pub biological_parent: Option<bool>,
    #[serde(default)]
    pub marriage_status: Option<MarriageStatus>,
}

impl Relationship {
    /// Create a relationship of the given kind between two people.
    pub fn new(kind: RelationshipKind, person1: PersonId, person2: PersonId) -> Self {
        Self {
            id: RelationshipId::new(),
            person1_id: Some(person1),
            person2_id: Some(person2),
            relationship_type: kind,
            biological_parent: None,
            marriage_status: None,
        }
    }

    /// `parent` is the biological parent of `child`.
    pub fn parent(parent: PersonId, child: PersonId) -> Self {
        Self::new(RelationshipKind::Parent, parent, child).with_biological_parent(true)
    }

    /// A married couple.
    pub fn spouse(a: PersonId, b: PersonId) -> Self {
        Self::new(RelationshipKind::Spouse, a, b).with_marriage_status(MarriageStatus::Married)
    }

    pub fn with_marriage_status(mut self, status: MarriageStatus) -> Self {
        self.marriage_status = Some(status);
        self
    }

    pub fn with_biological_parent(mut self, biological: bool) -> Self {
        self.biological_parent = Some(biological);
        self
    }

    /// Both endpoints, if the record names both.
    pub fn endpoints(&self) -> Option<(PersonId, PersonId)> {
        Some((self.person1_id?, self.person2_id?))
    }
}
