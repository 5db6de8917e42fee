//! Core domain logic for HotProspects.
//! This crate is the single source of truth for prospect invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod reminder;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::prospect::{Prospect, ProspectId, ProspectPatch, ProspectValidationError};
pub use query::view::{sort_and_filter, ProspectFilter, QueryEngine, SortKey};
pub use reminder::config::{ReminderConfig, ReminderConfigError};
pub use reminder::scheduler::{ReminderScheduler, ScheduleError, ScheduleOutcome};
pub use reminder::sink::{
    AuthorizationOptions, AuthorizationStatus, NotificationRequest, NotificationSink, SinkError,
};
pub use repo::memory_repo::InMemoryProspectRepository;
pub use repo::prospect_repo::{
    ProspectListQuery, ProspectRepository, RepoError, RepoResult, SqliteProspectRepository,
};
pub use service::prospect_store::{ProspectStore, StoreError, StoreResult};
pub use service::scan_ingestor::{
    encode_scan_payload, parse_scan_payload, ScanError, ScanIngestor, ScanPayload,
};

/// Minimal health-check API for smoke checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
