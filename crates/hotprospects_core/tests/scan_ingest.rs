use hotprospects_core::db::open_db_in_memory;
use hotprospects_core::{
    encode_scan_payload, InMemoryProspectRepository, ProspectStore, ProspectValidationError,
    ScanError, ScanIngestor, SqliteProspectRepository, StoreError,
};

#[test]
fn ingest_creates_one_uncontacted_prospect() {
    let store = ProspectStore::new(InMemoryProspectRepository::new());
    let ingestor = ScanIngestor::new(&store);

    let prospect = ingestor
        .ingest("Paul Hudson\npaul@hackingwithswift.com")
        .unwrap();

    assert_eq!(prospect.name, "Paul Hudson");
    assert_eq!(prospect.email_address, "paul@hackingwithswift.com");
    assert!(!prospect.is_contacted);
    assert_eq!(store.all().unwrap(), vec![prospect]);
}

#[test]
fn malformed_payloads_leave_store_unchanged() {
    let store = ProspectStore::new(SqliteProspectRepository::new(open_db_in_memory().unwrap()));
    let ingestor = ScanIngestor::new(&store);

    let one_line = ingestor.ingest("only-one-line").unwrap_err();
    assert!(matches!(one_line, ScanError::MalformedPayload { segments: 1 }));

    let three_lines = ingestor.ingest("a\nb\nc").unwrap_err();
    assert!(matches!(three_lines, ScanError::MalformedPayload { segments: 3 }));
    assert!(three_lines.to_string().contains("malformed payload"));

    assert!(store.is_empty().unwrap());
}

#[test]
fn blank_scanned_name_is_a_validation_error() {
    let store = ProspectStore::new(InMemoryProspectRepository::new());
    let ingestor = ScanIngestor::new(&store);

    let err = ingestor.ingest("\nghost@example.com").unwrap_err();
    assert!(matches!(
        err,
        ScanError::Store(StoreError::Validation(ProspectValidationError::EmptyName))
    ));
    assert!(store.is_empty().unwrap());
}

#[test]
fn own_card_payload_can_be_ingested() {
    let store = ProspectStore::new(InMemoryProspectRepository::new());
    let raw = encode_scan_payload("Anonymous", "you@yoursite.com").unwrap();

    let prospect = ScanIngestor::new(&store).ingest(&raw).unwrap();
    assert_eq!(prospect.name, "Anonymous");
    assert_eq!(prospect.email_address, "you@yoursite.com");
}

#[test]
fn repeated_scans_create_distinct_records() {
    let store = ProspectStore::new(InMemoryProspectRepository::new());
    let ingestor = ScanIngestor::new(&store);

    let first = ingestor.ingest("Paul Hudson\npaul@hackingwithswift.com").unwrap();
    let second = ingestor.ingest("Paul Hudson\npaul@hackingwithswift.com").unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(store.len().unwrap(), 2);
}
