//! Family Graph - parent, child and spouse adjacency derived from relationship records.

use std::collections::{BTreeSet, HashMap};

use lineage_model::{MarriageStatus, PersonId, Relationship, RelationshipKind};
use tracing::debug;

/// Parent/child/spouse adjacency over a set of relationship records.
///
/// The graph is rebuilt for every computation and never cached. `parents_of`
/// and `children_of` are exact inverses; `spouses_of` is symmetric and never
/// contains a divorced union.
#[derive(Debug, Clone, Default)]
pub struct FamilyGraph {
    /// Person -> their recorded parents.
    parents_of: HashMap<PersonId, BTreeSet<PersonId>>,

    /// Person -> their recorded children.
    children_of: HashMap<PersonId, BTreeSet<PersonId>>,

    /// Person -> current or former (not divorced) spouses.
    spouses_of: HashMap<PersonId, BTreeSet<PersonId>>,
}

static NO_ONE: BTreeSet<PersonId> = BTreeSet::new();

impl FamilyGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from a collection of relationship records.
    ///
    /// Records with a missing endpoint, an unrecognized type, or the same
    /// person on both ends are skipped. Construction never fails.
    pub fn build<'a>(records: impl IntoIterator<Item = &'a Relationship>) -> Self {
        let mut graph = Self::new();
        let mut skipped = 0usize;

        for record in records {
            if !graph.add_record(record) {
                skipped += 1;
            }
        }

        if skipped > 0 {
            debug!(skipped, "dropped malformed relationship records");
        }
        graph
    }

    /// Add one record. Returns false if the record was malformed.
    ///
    /// Records that are well-formed but carry no graph edge (twins, mentors,
    /// lineage gaps, divorced spouses) count as accepted.
    fn add_record(&mut self, record: &Relationship) -> bool {
        let Some((person1, person2)) = record.endpoints() else {
            return false;
        };
        if person1 == person2 {
            return false;
        }

        match record.relationship_type {
            RelationshipKind::Parent
            | RelationshipKind::AdoptedParent
            | RelationshipKind::FosterParent => self.add_parent(person1, person2),
            RelationshipKind::Spouse => {
                if record.marriage_status != Some(MarriageStatus::Divorced) {
                    self.add_spouses(person1, person2);
                }
            }
            // An ancestor at unknown distance is never a direct edge.
            RelationshipKind::LineageGap
            | RelationshipKind::Twin
            | RelationshipKind::Mentor
            | RelationshipKind::NamedAfter => {}
            RelationshipKind::Unrecognized => return false,
        }
        true
    }

    /// Add a directed parent -> child edge.
    pub fn add_parent(&mut self, parent: PersonId, child: PersonId) {
        self.parents_of.entry(child).or_default().insert(parent);
        self.children_of.entry(parent).or_default().insert(child);
    }

    /// Add a symmetric spouse edge.
    pub fn add_spouses(&mut self, a: PersonId, b: PersonId) {
        self.spouses_of.entry(a).or_default().insert(b);
        self.spouses_of.entry(b).or_default().insert(a);
    }

    /// Recorded parents of a person.
    pub fn parents(&self, id: PersonId) -> &BTreeSet<PersonId> {
        self.parents_of.get(&id).unwrap_or(&NO_ONE)
    }

    /// Recorded children of a person.
    pub fn children(&self, id: PersonId) -> &BTreeSet<PersonId> {
        self.children_of.get(&id).unwrap_or(&NO_ONE)
    }

    /// Non-divorced spouses of a person.
    pub fn spouses(&self, id: PersonId) -> &BTreeSet<PersonId> {
        self.spouses_of.get(&id).unwrap_or(&NO_ONE)
    }

    pub fn is_parent_of(&self, parent: PersonId, child: PersonId) -> bool {
        self.parents(child).contains(&parent)
    }

    pub fn are_spouses(&self, a: PersonId, b: PersonId) -> bool {
        self.spouses(a).contains(&b)
    }

    /// Number of parents two people have in common.
    pub fn shared_parent_count(&self, a: PersonId, b: PersonId) -> usize {
        self.parents(a).intersection(self.parents(b)).count()
    }

    /// Everyone sharing at least one parent with `id`, excluding `id` itself.
    pub fn siblings(&self, id: PersonId) -> BTreeSet<PersonId> {
        self.parents(id)
            .iter()
            .flat_map(|parent| self.children(*parent).iter().copied())
            .filter(|sibling| *sibling != id)
            .collect()
    }

    /// Grandparents of a person (parents of parents).
    pub fn grandparents(&self, id: PersonId) -> BTreeSet<PersonId> {
        self.parents(id)
            .iter()
            .flat_map(|parent| self.parents(*parent).iter().copied())
            .collect()
    }

    /// Grandchildren of a person (children of children).
    pub fn grandchildren(&self, id: PersonId) -> BTreeSet<PersonId> {
        self.children(id)
            .iter()
            .flat_map(|child| self.children(*child).iter().copied())
            .collect()
    }

    /// Every person appearing in a parent or spouse edge.
    pub fn people(&self) -> BTreeSet<PersonId> {
        self.parents_of
            .keys()
            .chain(self.children_of.keys())
            .chain(self.spouses_of.keys())
            .copied()
            .collect()
    }

    /// Total number of parent -> child edges.
    pub fn parent_edge_count(&self) -> usize {
        self.children_of.values().map(BTreeSet::len).sum()
    }
}
