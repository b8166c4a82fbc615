//! Kinship labels - canonical names for a relationship between two people.

use lineage_model::Gender;
use serde::{Deserialize, Serialize};

/// Ungendered relationship from one person to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    Oneself,
    Spouse,
    Parent,
    Child,
    Sibling,
    HalfSibling,
    Grandparent,
    Grandchild,
    /// Aunt or uncle.
    ParentsSibling,
    /// Niece or nephew.
    SiblingsChild,
    FirstCousin,
    ParentInLaw,
    ChildInLaw,
    SiblingInLaw,
}

/// A relation qualified by the gender of the person it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KinshipLabel {
    pub relation: Relation,
    /// Gender of the person being labelled, not the viewer.
    pub gender: Gender,
}

impl KinshipLabel {
    pub fn new(relation: Relation, gender: Gender) -> Self {
        Self { relation, gender }
    }

    /// The canonical display string, e.g. "Half-Sister" or "Father-in-Law".
    pub fn as_str(&self) -> &'static str {
        use Gender::{Female, Male, Other};
        use Relation::*;

        match (self.relation, self.gender) {
            (Oneself, _) => "Self",
            (Spouse, Male) => "Husband",
            (Spouse, Female) => "Wife",
            (Spouse, Other) => "Spouse",
            (Parent, Male) => "Father",
            (Parent, Female) => "Mother",
            (Parent, Other) => "Parent",
            (Child, Male) => "Son",
            (Child, Female) => "Daughter",
            (Child, Other) => "Child",
            (Sibling, Male) => "Brother",
            (Sibling, Female) => "Sister",
            (Sibling, Other) => "Sibling",
            (HalfSibling, Male) => "Half-Brother",
            (HalfSibling, Female) => "Half-Sister",
            (HalfSibling, Other) => "Half-Sibling",
            (Grandparent, Male) => "Grandfather",
            (Grandparent, Female) => "Grandmother",
            (Grandparent, Other) => "Grandparent",
            (Grandchild, Male) => "Grandson",
            (Grandchild, Female) => "Granddaughter",
            (Grandchild, Other) => "Grandchild",
            (ParentsSibling, Male) => "Uncle",
            (ParentsSibling, Female) => "Aunt",
            (ParentsSibling, Other) => "Parent's Sibling",
            (SiblingsChild, Male) => "Nephew",
            (SiblingsChild, Female) => "Niece",
            (SiblingsChild, Other) => "Sibling's Child",
            (FirstCousin, _) => "1st Cousin",
            (ParentInLaw, Male) => "Father-in-Law",
            (ParentInLaw, Female) => "Mother-in-Law",
            (ParentInLaw, Other) => "Parent-in-Law",
            (ChildInLaw, Male) => "Son-in-Law",
            (ChildInLaw, Female) => "Daughter-in-Law",
            (ChildInLaw, Other) => "Child-in-Law",
            (SiblingInLaw, Male) => "Brother-in-Law",
            (SiblingInLaw, Female) => "Sister-in-Law",
            (SiblingInLaw, Other) => "Sibling-in-Law",
        }
    }
}

impl std::fmt::Display for KinshipLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for KinshipLabel {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gendered_labels() {
        assert_eq!(KinshipLabel::new(Relation::Spouse, Gender::Female).as_str(), "Wife");
        assert_eq!(
            KinshipLabel::new(Relation::HalfSibling, Gender::Male).to_string(),
            "Half-Brother"
        );
        assert_eq!(
            KinshipLabel::new(Relation::ParentInLaw, Gender::Male).to_string(),
            "Father-in-Law"
        );
    }

    #[test]
    fn test_ungendered_labels() {
        assert_eq!(KinshipLabel::new(Relation::Oneself, Gender::Female).as_str(), "Self");
        assert_eq!(KinshipLabel::new(Relation::FirstCousin, Gender::Male).as_str(), "1st Cousin");
        assert_eq!(KinshipLabel::new(Relation::Parent, Gender::Other).as_str(), "Parent");
    }

    #[test]
    fn test_compare_with_str() {
        assert!(KinshipLabel::new(Relation::Grandparent, Gender::Male) == "Grandfather");
    }
}
