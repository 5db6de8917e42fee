//! Reminder scheduling configuration.

use crate::reminder::sink::AuthorizationOptions;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

const DEFAULT_FIRE_DELAY_SECS: u64 = 5;
const DEFAULT_TITLE_PREFIX: &str = "Contact";

/// Tunables for reminder requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderConfig {
    /// Seconds between scheduling and delivery. Must be positive.
    pub fire_delay_secs: u64,
    /// Title is `"{title_prefix} {name}"`.
    pub title_prefix: String,
    pub sound: bool,
    /// Options passed when permission has not been determined yet.
    pub authorization_options: AuthorizationOptions,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            fire_delay_secs: DEFAULT_FIRE_DELAY_SECS,
            title_prefix: DEFAULT_TITLE_PREFIX.to_string(),
            sound: true,
            authorization_options: AuthorizationOptions::default(),
        }
    }
}

impl ReminderConfig {
    pub fn fire_delay(&self) -> Duration {
        Duration::from_secs(self.fire_delay_secs)
    }

    pub fn validate(&self) -> Result<(), ReminderConfigError> {
        if self.fire_delay_secs == 0 {
            return Err(ReminderConfigError::ZeroFireDelay);
        }
        if self.title_prefix.trim().is_empty() {
            return Err(ReminderConfigError::EmptyTitlePrefix);
        }
        Ok(())
    }
}

/// Reminder config validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderConfigError {
    ZeroFireDelay,
    EmptyTitlePrefix,
}

impl Display for ReminderConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroFireDelay => write!(f, "reminder fire delay must be positive"),
            Self::EmptyTitlePrefix => write!(f, "reminder title prefix must not be empty"),
        }
    }
}

impl Error for ReminderConfigError {}
