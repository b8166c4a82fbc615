//! Succession disputes and interregnum records.

use serde::{Deserialize, Serialize};

use crate::entities::{DisputeId, HistoricDate, PersonId};

/// Basis on which a claimant presses a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    Inheritance,
    Legitimacy,
    Marriage,
    Designation,
    Conquest,
    Other,
}

/// How strong a claim is considered to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStrength {
    Weak,
    Moderate,
    Strong,
    Overwhelming,
}

/// Outcome of a dispute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisputeResolution {
    #[default]
    Ongoing,
    Successful,
    Failed,
    Compromised,
    Withdrawn,
}

/// A claim against the current line of succession.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dispute {
    pub id: DisputeId,
    pub claimant_id: PersonId,
    pub claim_type: ClaimType,
    pub claim_strength: ClaimStrength,
    #[serde(default)]
    pub resolution: DisputeResolution,
    #[serde(default)]
    pub raised_on: Option<HistoricDate>,
    #[serde(default)]
    pub resolved_on: Option<HistoricDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Dispute {
    /// Create a new ongoing dispute.
    pub fn new(claimant: PersonId, claim_type: ClaimType, claim_strength: ClaimStrength) -> Self {
        Self {
            id: DisputeId::new(),
            claimant_id: claimant,
            claim_type,
            claim_strength,
            resolution: DisputeResolution::Ongoing,
            raised_on: None,
            resolved_on: None,
            notes: None,
        }
    }

    pub fn raised(mut self, date: HistoricDate) -> Self {
        self.raised_on = Some(date);
        self
    }

    pub fn is_ongoing(&self) -> bool {
        self.resolution == DisputeResolution::Ongoing
    }
}

/// Why a dignity has no settled holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InterregnumReason {
    /// The heir is too young to rule.
    Minority,
    Incapacity,
    #[default]
    Vacancy,
    Dispute,
    Other,
}

/// A period without a settled holder, typically under a regent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Interregnum {
    #[serde(default)]
    pub regent_id: Option<PersonId>,
    #[serde(default)]
    pub reason: InterregnumReason,
    #[serde(default)]
    pub started_on: Option<HistoricDate>,
    #[serde(default)]
    pub expected_end: Option<HistoricDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Interregnum {
    /// A regency for the given reason.
    pub fn regency(regent: PersonId, reason: InterregnumReason) -> Self {
        Self {
            regent_id: Some(regent),
            reason,
            ..Default::default()
        }
    }
}
