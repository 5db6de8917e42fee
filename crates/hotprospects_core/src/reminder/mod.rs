//! Follow-up reminders for prospects.
//!
//! # Responsibility
//! - Define the notification sink contract the host platform implements.
//! - Drive the permission check, request, then submit flow for one reminder.
//!
//! # Invariants
//! - Permission denial is an outcome, never an error.
//! - One `schedule` call submits at most one request; nothing is retried.
//! - The scheduler never mutates the prospect store.

pub mod config;
pub mod scheduler;
pub mod sink;
