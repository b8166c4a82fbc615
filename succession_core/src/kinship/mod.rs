//! Kinship module - family graph construction and relationship labelling.
//!
//! - **graph**: parent/child/spouse adjacency built from flat relationship records
//! - **index**: person lookup by ID
//! - **label**: canonical relationship names
//! - **classifier**: the rule cascade mapping two people to a label

mod classifier;
mod graph;
mod index;
mod label;

pub use classifier::*;
pub use graph::*;
pub use index::*;
pub use label::*;
