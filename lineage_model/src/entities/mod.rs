//! Entity definitions for the lineage ledger.

mod date;
mod person;
mod relationship;

pub use date::*;
pub use person::*;
pub use relationship::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random ID.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an ID from a specific UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Create a nil/empty ID (useful for defaults).
            pub fn nil() -> Self {
                Self(Uuid::nil())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for people in the ledger.
    PersonId
);
uuid_id!(
    /// Unique identifier for noble houses.
    HouseId
);
uuid_id!(
    /// Unique identifier for relationship records.
    RelationshipId
);
uuid_id!(
    /// Unique identifier for dignities (titles, offices, ranks).
    DignityId
);
uuid_id!(
    /// Unique identifier for succession disputes.
    DisputeId
);

/// Recorded gender of a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}
