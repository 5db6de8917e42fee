//! Filtered and sorted prospect views.
//!
//! # Responsibility
//! - Define the fixed filter and sort vocabulary shared by queries and storage.
//! - Derive fresh ordered views from current store state on every call.
//!
//! # Invariants
//! - Views never alias or mutate the store.
//! - Ordering is total: sort key first, then `id` ascending.

pub mod view;
