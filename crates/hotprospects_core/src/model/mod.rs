//! Domain model for tracked prospects.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every prospect is identified by a stable `ProspectId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod prospect;
