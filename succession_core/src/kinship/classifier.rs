//! Kinship Classifier - labels the relationship between two people.
//!
//! Rules are tried in a fixed order and the first match wins:
//! 1. Self
//! 2. Spouse
//! 3. Parent / child
//! 4. Full or half sibling, by number of shared parents
//! 5. Grandparent / grandchild
//! 6. Aunt or uncle / niece or nephew
//! 7. First cousin
//! 8. In-laws, derived from a spouse's blood relation or a blood relative's spouse
//!
//! Anything else has no label. Cousins beyond the first degree and
//! step-relations are not classified.

use lineage_model::{Person, PersonId};
use serde::{Deserialize, Serialize};

use super::{FamilyGraph, KinshipLabel, PersonIndex, Relation};

/// A labelled relative of some root person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KinshipEntry {
    pub person_id: PersonId,
    pub label: KinshipLabel,
}

/// Classifies relationships over one graph snapshot.
pub struct KinshipClassifier<'a> {
    graph: &'a FamilyGraph,
    people: PersonIndex<'a>,
}

impl<'a> KinshipClassifier<'a> {
    /// Create a classifier over the given graph and people.
    pub fn new(graph: &'a FamilyGraph, people: PersonIndex<'a>) -> Self {
        Self { graph, people }
    }

    /// The people this classifier knows about.
    pub fn people(&self) -> &PersonIndex<'a> {
        &self.people
    }

    /// Label `to` as seen from `from`, e.g. "Grandfather" if `to` is the
    /// grandfather of `from`.
    ///
    /// Unknown IDs and unrelated people yield `None`.
    pub fn label(&self, from: PersonId, to: PersonId) -> Option<KinshipLabel> {
        if !self.people.contains(from) || !self.people.contains(to) {
            return None;
        }
        let relation = self.relation(from, to)?;
        Some(KinshipLabel::new(relation, self.people.gender(to)))
    }

    /// Ungendered relation of `to` as seen from `from`.
    pub fn relation(&self, from: PersonId, to: PersonId) -> Option<Relation> {
        if from == to {
            return Some(Relation::Oneself);
        }
        if self.graph.are_spouses(from, to) {
            return Some(Relation::Spouse);
        }
        self.blood_relation(from, to)
            .or_else(|| self.in_law_relation(from, to))
    }

    /// Every known person related to `root`, excluding `root`, ordered by ID.
    pub fn all_from(&self, root: PersonId) -> Vec<KinshipEntry> {
        if !self.people.contains(root) {
            return Vec::new();
        }

        let mut entries: Vec<KinshipEntry> = self
            .people
            .iter()
            .filter(|person| person.id != root)
            .filter_map(|person| {
                self.label(root, person.id).map(|label| KinshipEntry {
                    person_id: person.id,
                    label,
                })
            })
            .collect();

        entries.sort_by_key(|entry| entry.person_id);
        entries
    }

    fn blood_relation(&self, from: PersonId, to: PersonId) -> Option<Relation> {
        let graph = self.graph;

        if graph.parents(from).contains(&to) {
            return Some(Relation::Parent);
        }
        if graph.children(from).contains(&to) {
            return Some(Relation::Child);
        }

        match graph.shared_parent_count(from, to) {
            0 => {}
            1 => return Some(Relation::HalfSibling),
            _ => return Some(Relation::Sibling),
        }

        if graph.grandparents(from).contains(&to) {
            return Some(Relation::Grandparent);
        }
        if graph.grandchildren(from).contains(&to) {
            return Some(Relation::Grandchild);
        }

        let parents_siblings: Vec<PersonId> = graph
            .parents(from)
            .iter()
            .flat_map(|parent| graph.siblings(*parent))
            .collect();

        if parents_siblings.contains(&to) {
            return Some(Relation::ParentsSibling);
        }
        if graph
            .siblings(from)
            .iter()
            .any(|sibling| graph.children(*sibling).contains(&to))
        {
            return Some(Relation::SiblingsChild);
        }
        if parents_siblings
            .iter()
            .any(|aunt_or_uncle| graph.children(*aunt_or_uncle).contains(&to))
        {
            return Some(Relation::FirstCousin);
        }

        None
    }

    fn in_law_relation(&self, from: PersonId, to: PersonId) -> Option<Relation> {
        // `to` married one of our blood relatives.
        for relative in self.graph.spouses(to) {
            if *relative == from {
                continue;
            }
            match self.blood_relation(from, *relative) {
                Some(Relation::Sibling | Relation::HalfSibling) => {
                    return Some(Relation::SiblingInLaw)
                }
                Some(Relation::Child) => return Some(Relation::ChildInLaw),
                _ => {}
            }
        }

        // `to` is a blood relative of our spouse.
        for spouse in self.graph.spouses(from) {
            match self.blood_relation(*spouse, to) {
                Some(Relation::Parent) => return Some(Relation::ParentInLaw),
                Some(Relation::Sibling | Relation::HalfSibling) => {
                    return Some(Relation::SiblingInLaw)
                }
                _ => {}
            }
        }

        None
    }
}

/// Label `to` as seen from `from`.
pub fn relationship_label<'a>(
    from: PersonId,
    to: PersonId,
    graph: &FamilyGraph,
    people: impl IntoIterator<Item = &'a Person>,
) -> Option<KinshipLabel> {
    KinshipClassifier::new(graph, PersonIndex::new(people)).label(from, to)
}

/// Every known person related to `root`, with their label.
pub fn all_relationships_from<'a>(
    root: PersonId,
    people: impl IntoIterator<Item = &'a Person>,
    graph: &FamilyGraph,
) -> Vec<KinshipEntry> {
    KinshipClassifier::new(graph, PersonIndex::new(people)).all_from(root)
}
