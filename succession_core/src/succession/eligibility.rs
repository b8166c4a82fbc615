//! Candidate eligibility under a dignity's succession rules.

use lineage_model::{Person, SuccessionRules};
use serde::{Deserialize, Serialize};

/// Why a candidate cannot inherit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExclusionReason {
    Deceased,
    /// Born a bastard and not eligible under the dignity's rules.
    Illegitimate,
    /// The dignity does not pass through women.
    FemaleExcluded,
}

impl ExclusionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExclusionReason::Deceased => "Deceased",
            ExclusionReason::Illegitimate => "Illegitimate birth",
            ExclusionReason::FemaleExcluded => "Female line excluded",
        }
    }
}

impl std::fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of checking one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Eligibility {
    pub exclusion: Option<ExclusionReason>,
    /// Eligible, but ranked after every full-priority candidate.
    pub lower_priority: bool,
}

impl Eligibility {
    pub fn is_excluded(&self) -> bool {
        self.exclusion.is_some()
    }
}

/// Check a candidate against the rules.
///
/// `male_preference` is set under male-preference primogeniture, where women
/// remain in the line but rank behind every eligible man.
pub fn assess(person: &Person, rules: &SuccessionRules, male_preference: bool) -> Eligibility {
    let mut eligibility = Eligibility::default();

    if !person.is_alive() {
        eligibility.exclusion = Some(ExclusionReason::Deceased);
        return eligibility;
    }

    if person.is_bastard() && rules.exclude_bastards {
        if person.is_legitimized() && rules.legitimized_bastards_eligible {
            eligibility.lower_priority = true;
        } else {
            eligibility.exclusion = Some(ExclusionReason::Illegitimate);
            return eligibility;
        }
    }

    if person.is_female() {
        if rules.exclude_women {
            eligibility.exclusion = Some(ExclusionReason::FemaleExcluded);
        } else if male_preference {
            eligibility.lower_priority = true;
        }
    }

    eligibility
}
