//! Permission-gated reminder scheduling.
//!
//! # Flow
//! - `Authorized`: submit one non-repeating request.
//! - `NotDetermined`: ask once; submit on grant, report `Denied` on refusal.
//! - `Denied`: report `Denied` without touching the sink again.

use crate::model::prospect::Prospect;
use crate::reminder::config::{ReminderConfig, ReminderConfigError};
use crate::reminder::sink::{AuthorizationStatus, NotificationRequest, NotificationSink, SinkError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Non-error result of one `schedule` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleOutcome {
    /// The sink accepted a request.
    Scheduled {
        request_id: String,
        fire_delay: Duration,
    },
    /// Permission is denied; nothing was submitted.
    Denied,
}

/// Scheduling failure surfaced to the caller. Never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    Sink(SinkError),
}

impl Display for ScheduleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sink(err) => write!(f, "reminder scheduling failed: {err}"),
        }
    }
}

impl Error for ScheduleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sink(err) => Some(err),
        }
    }
}

impl From<SinkError> for ScheduleError {
    fn from(value: SinkError) -> Self {
        Self::Sink(value)
    }
}

/// Builds reminder requests and hands them to an injected sink.
#[derive(Clone)]
pub struct ReminderScheduler {
    sink: Arc<dyn NotificationSink>,
    config: Arc<ReminderConfig>,
}

impl ReminderScheduler {
    /// Creates a scheduler after validating `config`.
    pub fn new(
        sink: Arc<dyn NotificationSink>,
        config: ReminderConfig,
    ) -> Result<Self, ReminderConfigError> {
        config.validate()?;
        Ok(Self {
            sink,
            config: Arc::new(config),
        })
    }

    /// Creates a scheduler with the default 5 second delay.
    pub fn with_default_config(sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            sink,
            config: Arc::new(ReminderConfig::default()),
        }
    }

    /// Builds the one-shot request for `prospect` without submitting it.
    pub fn build_request(&self, prospect: &Prospect) -> NotificationRequest {
        NotificationRequest {
            id: Uuid::new_v4().to_string(),
            title: format!("{} {}", self.config.title_prefix, prospect.name),
            subtitle: prospect.email_address.clone(),
            sound: self.config.sound,
            fire_delay: self.config.fire_delay(),
            repeats: false,
        }
    }

    /// Runs the permission flow and submits at most one request.
    ///
    /// # Errors
    /// - `ScheduleError::Sink` when any sink call fails.
    pub async fn schedule(&self, prospect: &Prospect) -> Result<ScheduleOutcome, ScheduleError> {
        let result = self.run(prospect).await;
        match &result {
            Ok(ScheduleOutcome::Scheduled { request_id, .. }) => info!(
                "event=reminder_schedule module=reminder status=ok prospect_id={} request_id={}",
                prospect.id, request_id
            ),
            Ok(ScheduleOutcome::Denied) => info!(
                "event=reminder_schedule module=reminder status=denied prospect_id={}",
                prospect.id
            ),
            Err(err) => error!(
                "event=reminder_schedule module=reminder status=error prospect_id={} error={}",
                prospect.id, err
            ),
        }
        result
    }

    /// Runs `schedule` as an independent task so the caller never waits.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn_schedule(
        &self,
        prospect: Prospect,
    ) -> JoinHandle<Result<ScheduleOutcome, ScheduleError>> {
        let scheduler = self.clone();
        tokio::spawn(async move { scheduler.schedule(&prospect).await })
    }

    async fn run(&self, prospect: &Prospect) -> Result<ScheduleOutcome, ScheduleError> {
        let authorized = match self.sink.authorization_status().await? {
            AuthorizationStatus::Authorized => true,
            AuthorizationStatus::Denied => false,
            AuthorizationStatus::NotDetermined => {
                self.sink
                    .request_authorization(self.config.authorization_options)
                    .await?
            }
        };

        if !authorized {
            return Ok(ScheduleOutcome::Denied);
        }

        let request = self.build_request(prospect);
        let request_id = request.id.clone();
        let fire_delay = request.fire_delay;
        self.sink.submit(request).await?;
        Ok(ScheduleOutcome::Scheduled {
            request_id,
            fire_delay,
        })
    }
}
