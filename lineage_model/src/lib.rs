//! # Lineage Model
//!
//! The "House Ledger" crate - people, family relationship records, dignities
//! and their succession bookkeeping. This crate holds data only; kinship and
//! succession logic live in `succession_core`.

pub mod chronicle;
pub mod dignity;
pub mod entities;

pub use chronicle::*;
pub use dignity::*;
pub use entities::*;
