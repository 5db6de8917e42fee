//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the persistence contract for prospect records keyed by `id`.
//! - Isolate SQLite query details from store orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Prospect::validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`, `Conflict`) in
//!   addition to DB transport errors.

pub mod memory_repo;
pub mod prospect_repo;
