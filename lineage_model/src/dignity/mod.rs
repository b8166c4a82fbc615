//! Dignities - hereditary titles, offices and ranks - and their succession data.

mod dispute;

pub use dispute::*;

use serde::{Deserialize, Serialize};

use crate::entities::{DignityId, DisputeId, HouseId, PersonId};

/// How a dignity passes from one holder to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuccessionType {
    /// Eldest child inherits; sons before daughters.
    MalePrimogeniture,
    /// Eldest child inherits regardless of sex.
    AbsolutePrimogeniture,
    /// Oldest living male of the dynasty inherits.
    AgnaticSeniority,
    Elective,
    Tanistry,
    Appointment,
    Custom,
}

/// Eligibility rules layered on top of the succession type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SuccessionRules {
    pub exclude_bastards: bool,
    pub legitimized_bastards_eligible: bool,
    pub exclude_women: bool,
}

/// Aggregate succession state of a dignity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SuccessionStatus {
    #[default]
    Stable,
    /// Exactly one ongoing claim.
    Disputed,
    /// Two or more ongoing claims.
    Crisis,
    Vacant,
    Interregnum,
}

/// A trackable title, office or rank of authority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dignity {
    pub id: DignityId,
    pub name: String,
    pub succession_type: SuccessionType,
    #[serde(default)]
    pub succession_rules: SuccessionRules,
    #[serde(default)]
    pub current_holder_id: Option<PersonId>,
    #[serde(default)]
    pub current_house_id: Option<HouseId>,
    #[serde(default)]
    pub designated_heir_id: Option<PersonId>,
    #[serde(default)]
    pub succession_status: SuccessionStatus,
    #[serde(default)]
    pub disputes: Vec<Dispute>,
    #[serde(default)]
    pub interregnum: Option<Interregnum>,
    #[serde(default)]
    pub vacant: bool,
}

impl Dignity {
    /// Create a new, unheld dignity.
    pub fn new(name: impl Into<String>, succession_type: SuccessionType) -> Self {
        Self {
            id: DignityId::new(),
            name: name.into(),
            succession_type,
            succession_rules: SuccessionRules::default(),
            current_holder_id: None,
            current_house_id: None,
            designated_heir_id: None,
            succession_status: SuccessionStatus::Stable,
            disputes: Vec::new(),
            interregnum: None,
            vacant: false,
        }
    }

    pub fn held_by(mut self, holder: PersonId) -> Self {
        self.current_holder_id = Some(holder);
        self
    }

    pub fn with_house(mut self, house: HouseId) -> Self {
        self.current_house_id = Some(house);
        self
    }

    pub fn with_rules(mut self, rules: SuccessionRules) -> Self {
        self.succession_rules = rules;
        self
    }

    pub fn with_designated_heir(mut self, heir: PersonId) -> Self {
        self.designated_heir_id = Some(heir);
        self
    }

    /// Claims that have not been settled yet.
    pub fn ongoing_disputes(&self) -> impl Iterator<Item = &Dispute> {
        self.disputes.iter().filter(|d| d.is_ongoing())
    }

    pub fn ongoing_dispute_count(&self) -> usize {
        self.ongoing_disputes().count()
    }

    /// Set the status implied by ongoing disputes and return it: none is
    /// stable, one is disputed, two or more is a crisis.
    ///
    /// An interregnum status is overwritten as well.
    pub fn recompute_status(&mut self) -> SuccessionStatus {
        self.succession_status = match self.ongoing_dispute_count() {
            0 => SuccessionStatus::Stable,
            1 => SuccessionStatus::Disputed,
            _ => SuccessionStatus::Crisis,
        };
        self.succession_status
    }

    /// Get dispute by ID.
    pub fn get_dispute(&self, id: DisputeId) -> Option<&Dispute> {
        self.disputes.iter().find(|d| d.id == id)
    }

    /// Get mutable dispute by ID.
    pub fn get_dispute_mut(&mut self, id: DisputeId) -> Option<&mut Dispute> {
        self.disputes.iter_mut().find(|d| d.id == id)
    }

    /// Whether a regency or other interregnum is in force.
    pub fn in_interregnum(&self) -> bool {
        self.interregnum.is_some()
    }
}
