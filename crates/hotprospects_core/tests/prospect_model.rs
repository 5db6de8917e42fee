use hotprospects_core::{Prospect, ProspectValidationError};
use uuid::Uuid;

#[test]
fn prospect_new_sets_defaults() {
    let prospect = Prospect::new("Ada", "ada@example.com", false).unwrap();

    assert!(!prospect.id.is_nil());
    assert_eq!(prospect.name, "Ada");
    assert_eq!(prospect.email_address, "ada@example.com");
    assert!(!prospect.is_contacted);
    assert!(prospect.date_added > 0);
}

#[test]
fn email_is_not_validated() {
    let prospect = Prospect::new("Ada", "not an email", true).unwrap();
    assert_eq!(prospect.email_address, "not an email");
    assert!(prospect.is_contacted);
}

#[test]
fn with_id_rejects_nil_uuid_and_blank_name() {
    let err = Prospect::with_id(Uuid::nil(), "Ada", "a@example.com", 1).unwrap_err();
    assert_eq!(err, ProspectValidationError::NilId);

    let err = Prospect::with_id(Uuid::new_v4(), " \t", "a@example.com", 1).unwrap_err();
    assert_eq!(err, ProspectValidationError::EmptyName);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut prospect =
        Prospect::with_id(id, "Paul Hudson", "paul@hackingwithswift.com", 1_700_000_000_000)
            .unwrap();
    prospect.is_contacted = true;

    let json = serde_json::to_value(&prospect).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["name"], "Paul Hudson");
    assert_eq!(json["email_address"], "paul@hackingwithswift.com");
    assert_eq!(json["is_contacted"], true);
    assert_eq!(json["date_added"], 1_700_000_000_000_i64);

    let decoded: Prospect = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, prospect);
}

#[test]
fn deserialize_rejects_empty_name() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "",
        "email_address": "x@example.com",
        "is_contacted": false,
        "date_added": 1
    });

    let err = serde_json::from_value::<Prospect>(value).unwrap_err();
    assert!(
        err.to_string().contains("prospect name must not be empty"),
        "unexpected error: {err}"
    );
}
