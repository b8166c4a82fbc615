//! Person lookup by ID, built once per computation.

use std::collections::HashMap;

use lineage_model::{Gender, Person, PersonId};

/// Borrowed index of people by ID.
#[derive(Debug, Clone, Default)]
pub struct PersonIndex<'a> {
    people: HashMap<PersonId, &'a Person>,
}

impl<'a> PersonIndex<'a> {
    /// Index every person in the collection. Later duplicates win.
    pub fn new(people: impl IntoIterator<Item = &'a Person>) -> Self {
        Self {
            people: people.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    pub fn get(&self, id: PersonId) -> Option<&'a Person> {
        self.people.get(&id).copied()
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.people.contains_key(&id)
    }

    /// Gender of a known person; unknown people count as `Other`.
    pub fn gender(&self, id: PersonId) -> Gender {
        self.get(id).map(|p| p.gender).unwrap_or(Gender::Other)
    }

    /// Iterate over every indexed person.
    pub fn iter(&self) -> impl Iterator<Item = &'a Person> + '_ {
        self.people.values().copied()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}
