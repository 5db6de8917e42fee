//! Scan payload parsing and ingestion.
//!
//! # Responsibility
//! - Turn a raw `<name>\n<email>` scan payload into a new prospect.
//! - Build the same payload shape for the user's own shareable card.
//!
//! # Invariants
//! - A payload must split into exactly two segments on `\n`.
//! - Malformed input is rejected whole; the store is never partially written.

use crate::model::prospect::Prospect;
use crate::repo::prospect_repo::ProspectRepository;
use crate::service::prospect_store::{ProspectStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

const SEGMENT_SEPARATOR: char = '\n';
const EXPECTED_SEGMENTS: usize = 2;

/// Scan ingestion errors.
#[derive(Debug)]
pub enum ScanError {
    /// Payload did not split into exactly two segments.
    MalformedPayload { segments: usize },
    /// A field cannot be encoded into a payload.
    InvalidField(&'static str),
    /// Store rejected the parsed record.
    Store(StoreError),
}

impl Display for ScanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedPayload { segments } => write!(
                f,
                "malformed payload: expected {EXPECTED_SEGMENTS} lines, got {segments}"
            ),
            Self::InvalidField(details) => write!(f, "invalid scan field: {details}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ScanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ScanError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Parsed two-line scan payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPayload {
    pub name: String,
    pub email_address: String,
}

/// Splits `raw` into name and email segments.
///
/// A trailing `\r` on either segment is dropped so CRLF payloads parse like LF.
pub fn parse_scan_payload(raw: &str) -> Result<ScanPayload, ScanError> {
    let segments: Vec<&str> = raw
        .split(SEGMENT_SEPARATOR)
        .map(|segment| segment.strip_suffix('\r').unwrap_or(segment))
        .collect();

    match segments.as_slice() {
        [name, email_address] => Ok(ScanPayload {
            name: (*name).to_string(),
            email_address: (*email_address).to_string(),
        }),
        _ => Err(ScanError::MalformedPayload {
            segments: segments.len(),
        }),
    }
}

/// Builds a payload that `parse_scan_payload` reads back unchanged.
pub fn encode_scan_payload(name: &str, email_address: &str) -> Result<String, ScanError> {
    if name.trim().is_empty() {
        return Err(ScanError::InvalidField("name must not be empty"));
    }
    if name.contains(['\n', '\r']) {
        return Err(ScanError::InvalidField("name must be a single line"));
    }
    if email_address.contains(['\n', '\r']) {
        return Err(ScanError::InvalidField("email must be a single line"));
    }
    Ok(format!("{name}{SEGMENT_SEPARATOR}{email_address}"))
}

/// Feeds scanned payloads into a [`ProspectStore`].
pub struct ScanIngestor<'s, R: ProspectRepository> {
    store: &'s ProspectStore<R>,
}

impl<'s, R: ProspectRepository> ScanIngestor<'s, R> {
    pub fn new(store: &'s ProspectStore<R>) -> Self {
        Self { store }
    }

    /// Parses `raw` and creates an uncontacted prospect from it.
    ///
    /// No retry: a malformed scan is dropped and the caller re-prompts.
    pub fn ingest(&self, raw: &str) -> Result<Prospect, ScanError> {
        let payload = parse_scan_payload(raw).map_err(|err| {
            warn!(
                "event=scan_ingest module=scan status=rejected payload_bytes={} reason={}",
                raw.len(),
                err
            );
            err
        })?;

        let prospect = self
            .store
            .create(payload.name, payload.email_address, false)?;
        info!(
            "event=scan_ingest module=scan status=ok prospect_id={}",
            prospect.id
        );
        Ok(prospect)
    }
}

#[cfg(test)]
mod tests {
    use super::{encode_scan_payload, parse_scan_payload, ScanError};

    #[test]
    fn crlf_payload_parses_like_lf() {
        let payload = parse_scan_payload("Paul Hudson\r\npaul@hackingwithswift.com").unwrap();
        assert_eq!(payload.name, "Paul Hudson");
        assert_eq!(payload.email_address, "paul@hackingwithswift.com");
    }

    #[test]
    fn trailing_newline_yields_empty_email() {
        let payload = parse_scan_payload("Paul Hudson\n").unwrap();
        assert_eq!(payload.email_address, "");
    }

    #[test]
    fn empty_payload_is_one_segment() {
        let err = parse_scan_payload("").unwrap_err();
        assert!(matches!(err, ScanError::MalformedPayload { segments: 1 }));
    }

    #[test]
    fn encode_output_parses_back() {
        let raw = encode_scan_payload("Anonymous", "you@yoursite.com").unwrap();
        let payload = parse_scan_payload(&raw).unwrap();
        assert_eq!(payload.name, "Anonymous");
        assert_eq!(payload.email_address, "you@yoursite.com");
    }

    #[test]
    fn encode_rejects_multiline_fields() {
        assert!(matches!(
            encode_scan_payload("a\nb", "c"),
            Err(ScanError::InvalidField(_))
        ));
        assert!(matches!(
            encode_scan_payload("a", "c\r"),
            Err(ScanError::InvalidField(_))
        ));
        assert!(matches!(
            encode_scan_payload("", "c"),
            Err(ScanError::InvalidField(_))
        ));
    }
}
