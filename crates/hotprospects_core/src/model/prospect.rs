//! Prospect domain model.
//!
//! # Responsibility
//! - Define the canonical contact record tracked by the core.
//! - Provide field-level validation shared by every write path.
//!
//! # Invariants
//! - `id` is stable, never nil, and never reused for another prospect.
//! - `date_added` is assigned once and never re-derived by updates.
//! - `name` is never empty (whitespace-only counts as empty).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for a prospect record.
pub type ProspectId = Uuid;

/// Field validation failures for [`Prospect`] records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProspectValidationError {
    /// `id` is the nil UUID.
    NilId,
    /// `name` is empty or whitespace-only.
    EmptyName,
}

impl Display for ProspectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "prospect id must not be nil"),
            Self::EmptyName => write!(f, "prospect name must not be empty"),
        }
    }
}

impl Error for ProspectValidationError {}

/// Canonical contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProspectWire")]
pub struct Prospect {
    /// Stable ID assigned at creation.
    pub id: ProspectId,
    /// Display name; never empty.
    pub name: String,
    /// Opaque email text, not validated.
    pub email_address: String,
    /// Outreach status.
    pub is_contacted: bool,
    /// Unix epoch milliseconds at creation.
    pub date_added: i64,
}

#[derive(Deserialize)]
struct ProspectWire {
    id: ProspectId,
    name: String,
    email_address: String,
    is_contacted: bool,
    date_added: i64,
}

impl TryFrom<ProspectWire> for Prospect {
    type Error = ProspectValidationError;

    fn try_from(wire: ProspectWire) -> Result<Self, Self::Error> {
        let prospect = Self {
            id: wire.id,
            name: wire.name,
            email_address: wire.email_address,
            is_contacted: wire.is_contacted,
            date_added: wire.date_added,
        };
        prospect.validate()?;
        Ok(prospect)
    }
}

impl Prospect {
    /// Creates a new uncontacted-by-default prospect stamped with the current time.
    ///
    /// # Errors
    /// - [`ProspectValidationError::EmptyName`] when `name` is blank.
    pub fn new(
        name: impl Into<String>,
        email_address: impl Into<String>,
        is_contacted: bool,
    ) -> Result<Self, ProspectValidationError> {
        let mut prospect =
            Self::with_id(Uuid::new_v4(), name, email_address, now_epoch_ms())?;
        prospect.is_contacted = is_contacted;
        Ok(prospect)
    }

    /// Creates a prospect with caller-provided identity and creation time.
    ///
    /// Used by persistence read-back and import paths where both already exist.
    /// `is_contacted` starts as `false`.
    pub fn with_id(
        id: ProspectId,
        name: impl Into<String>,
        email_address: impl Into<String>,
        date_added: i64,
    ) -> Result<Self, ProspectValidationError> {
        let prospect = Self {
            id,
            name: name.into(),
            email_address: email_address.into(),
            is_contacted: false,
            date_added,
        };
        prospect.validate()?;
        Ok(prospect)
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), ProspectValidationError> {
        if self.id.is_nil() {
            return Err(ProspectValidationError::NilId);
        }
        validate_name(&self.name)
    }

    /// Applies a partial edit. `id` and `date_added` are never touched.
    ///
    /// The record is left unchanged when validation fails.
    pub fn apply(&mut self, patch: &ProspectPatch) -> Result<(), ProspectValidationError> {
        if let Some(name) = patch.name.as_deref() {
            validate_name(name)?;
        }

        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(email_address) = &patch.email_address {
            self.email_address = email_address.clone();
        }
        if let Some(is_contacted) = patch.is_contacted {
            self.is_contacted = is_contacted;
        }
        Ok(())
    }
}

/// Partial update for the mutable prospect fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProspectPatch {
    pub name: Option<String>,
    pub email_address: Option<String>,
    pub is_contacted: Option<bool>,
}

impl ProspectPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email_address(mut self, email_address: impl Into<String>) -> Self {
        self.email_address = Some(email_address.into());
        self
    }

    pub fn contacted(mut self, is_contacted: bool) -> Self {
        self.is_contacted = Some(is_contacted);
        self
    }

    /// Returns whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email_address.is_none() && self.is_contacted.is_none()
    }
}

fn validate_name(name: &str) -> Result<(), ProspectValidationError> {
    if name.trim().is_empty() {
        return Err(ProspectValidationError::EmptyName);
    }
    Ok(())
}

/// Current wall-clock time as Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
        })
}
