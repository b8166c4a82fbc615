//! Person definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Gender, HistoricDate, HouseId, PersonId};

/// Legitimacy of a person's birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Legitimacy {
    Legitimate,
    Bastard,
    Adopted,
    #[default]
    Unknown,
}

/// Further standing of a person born out of wedlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BastardStatus {
    /// Formally legitimized by decree.
    Legitimized,
    /// Recognised by the parent but not legitimized.
    Acknowledged,
    Unacknowledged,
}

/// A person in the family ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub date_of_birth: Option<HistoricDate>,
    #[serde(default)]
    pub date_of_death: Option<HistoricDate>,
    #[serde(default)]
    pub legitimacy_status: Legitimacy,
    #[serde(default)]
    pub bastard_status: Option<BastardStatus>,
    #[serde(default)]
    pub house_id: Option<HouseId>,

    /// Worldbuilding data the engine does not interpret.
    #[serde(flatten)]
    pub extra_fields: HashMap<String, serde_json::Value>,
}

impl Person {
    /// Create a new person with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PersonId::new(),
            name: name.into(),
            title: None,
            gender: Gender::Other,
            date_of_birth: None,
            date_of_death: None,
            legitimacy_status: Legitimacy::Legitimate,
            bastard_status: None,
            house_id: None,
            extra_fields: HashMap::new(),
        }
    }

    /// Use a specific ID instead of a random one.
    pub fn with_id(mut self, id: PersonId) -> Self {
        self.id = id;
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn born(mut self, date: HistoricDate) -> Self {
        self.date_of_birth = Some(date);
        self
    }

    pub fn died(mut self, date: HistoricDate) -> Self {
        self.date_of_death = Some(date);
        self
    }

    pub fn with_legitimacy(mut self, legitimacy: Legitimacy) -> Self {
        self.legitimacy_status = legitimacy;
        self
    }

    pub fn with_bastard_status(mut self, status: BastardStatus) -> Self {
        self.bastard_status = Some(status);
        self
    }

    pub fn of_house(mut self, house: HouseId) -> Self {
        self.house_id = Some(house);
        self
    }

    /// A person is alive until a date of death is recorded.
    pub fn is_alive(&self) -> bool {
        self.date_of_death.is_none()
    }

    pub fn is_male(&self) -> bool {
        self.gender == Gender::Male
    }

    pub fn is_female(&self) -> bool {
        self.gender == Gender::Female
    }

    pub fn is_bastard(&self) -> bool {
        self.legitimacy_status == Legitimacy::Bastard
    }

    /// Born a bastard and later legitimized.
    pub fn is_legitimized(&self) -> bool {
        self.is_bastard() && self.bastard_status == Some(BastardStatus::Legitimized)
    }

    /// Birth date for seniority sorting; unknown births sort last.
    pub fn birth_sort_key(&self) -> HistoricDate {
        self.date_of_birth.unwrap_or(HistoricDate::FAR_FUTURE)
    }
}
