//! The chronicle - an in-memory snapshot of people, relationships and dignities.
//!
//! Persistence and cloud sync live outside this workspace; they hand the engine
//! a snapshot and accept dignity writes through [`DignityStore`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::dignity::Dignity;
use crate::entities::{DignityId, Person, PersonId, Relationship};

/// Read/write access to dignity records.
///
/// Implementors provide no locking; callers serialize writes to any one
/// dignity.
pub trait DignityStore {
    /// Fetch a copy of the dignity, if it exists.
    fn load_dignity(&self, id: DignityId) -> Option<Dignity>;

    /// Insert or replace a dignity.
    fn save_dignity(&mut self, dignity: Dignity);
}

/// A complete snapshot of the ledger at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Chronicle {
    /// All known people.
    pub people: HashMap<PersonId, Person>,

    /// Flat relationship records, possibly incomplete.
    pub relationships: Vec<Relationship>,

    /// All tracked dignities.
    pub dignities: HashMap<DignityId, Dignity>,
}

impl Chronicle {
    /// Create a new empty chronicle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a person to the chronicle.
    pub fn add_person(&mut self, person: Person) -> PersonId {
        let id = person.id;
        self.people.insert(id, person);
        id
    }

    /// Record a relationship.
    pub fn add_relationship(&mut self, relationship: Relationship) {
        self.relationships.push(relationship);
    }

    /// Add a dignity to the chronicle.
    pub fn add_dignity(&mut self, dignity: Dignity) -> DignityId {
        let id = dignity.id;
        self.dignities.insert(id, dignity);
        id
    }

    /// Get person by ID.
    pub fn get_person(&self, id: PersonId) -> Option<&Person> {
        self.people.get(&id)
    }

    /// Get dignity by ID.
    pub fn get_dignity(&self, id: DignityId) -> Option<&Dignity> {
        self.dignities.get(&id)
    }

    /// Iterate over every person.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }
}

impl DignityStore for Chronicle {
    fn load_dignity(&self, id: DignityId) -> Option<Dignity> {
        self.dignities.get(&id).cloned()
    }

    fn save_dignity(&mut self, dignity: Dignity) {
        self.dignities.insert(dignity.id, dignity);
    }
}
