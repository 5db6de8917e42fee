//! Notification sink contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Platform notification permission state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationStatus {
    /// The user has not been asked yet.
    NotDetermined,
    Denied,
    Authorized,
}

/// Presentation capabilities requested alongside authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationOptions {
    pub alert: bool,
    pub badge: bool,
    pub sound: bool,
}

impl Default for AuthorizationOptions {
    fn default() -> Self {
        Self {
            alert: true,
            badge: true,
            sound: true,
        }
    }
}

/// One-shot or repeating notification submitted to the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    /// Unique per request; two schedules for one prospect get two ids.
    pub id: String,
    pub title: String,
    pub subtitle: String,
    /// Play the platform default sound.
    pub sound: bool,
    /// Delay from submission until delivery.
    pub fire_delay: Duration,
    pub repeats: bool,
}

/// Transport failure reported by a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkError {
    message: String,
}

impl SinkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for SinkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "notification sink error: {}", self.message)
    }
}

impl Error for SinkError {}

/// Host notification service.
///
/// Implementations guarantee at-least-once delivery of accepted requests.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn authorization_status(&self) -> Result<AuthorizationStatus, SinkError>;

    /// Prompts for permission. Returns whether it was granted.
    async fn request_authorization(
        &self,
        options: AuthorizationOptions,
    ) -> Result<bool, SinkError>;

    async fn submit(&self, request: NotificationRequest) -> Result<(), SinkError>;
}
