//! # Succession Core
//!
//! The kinship and succession engine. This crate reads snapshots from
//! `lineage_model`, derives a family graph from them, and answers two kinds of
//! question about it.
//!
//! ## Core Components
//!
//! - **kinship**: Family graph builder and the relationship classifier ("Grandfather", "Half-Sister", ...)
//! - **succession**: Ranked lines of succession, heirs, and the dispute/interregnum state machine
//! - **config**: Traversal limits, loadable from TOML
//!
//! ## Design Philosophy
//!
//! - **Snapshot-Driven**: Every query rebuilds what it needs from the snapshot it is given; nothing is cached
//! - **Tolerant**: Sparse or malformed family data yields empty answers, never errors
//! - **Single Writer**: Dispute mutators do a plain read-modify-write; callers serialize edits per dignity

pub mod config;
pub mod error;
pub mod kinship;
pub mod succession;

pub use config::*;
pub use error::{ConfigError, SuccessionError};
pub use kinship::*;
pub use succession::*;
