use keyledger_store::{LicenseStatus, LicenseStore, StoreError};

fn store() -> LicenseStore {
    LicenseStore::open_in_memory().unwrap()
}

// ── Create ───────────────────────────────────────────────────────

#[test]
fn create_then_status_is_active() {
    let store = store();
    store.create("ABC-123", Some("a@x.com")).unwrap();
    assert_eq!(store.status("ABC-123").unwrap(), Some(LicenseStatus::Active));
}

#[test]
fn create_assigns_id_and_creation_date() {
    let store = store();
    let before = chrono::Utc::now();
    let rec = store.create("KEY-1", None).unwrap();
    assert_eq!(rec.license_id, "KEY-1");
    assert_eq!(rec.status, LicenseStatus::Active);
    assert_eq!(rec.customer_email, None);
    assert!(rec.id >= 1);
    assert!(rec.creation_date >= before);
}

#[test]
fn create_assigns_monotonic_ids() {
    let store = store();
    let a = store.create("KEY-A", None).unwrap();
    let b = store.create("KEY-B", None).unwrap();
    assert!(b.id > a.id);
}

#[test]
fn duplicate_create_fails_and_first_record_is_unchanged() {
    let store = store();
    store.create("ABC-123", Some("a@x.com")).unwrap();
    store.update_status("ABC-123", LicenseStatus::Expired).unwrap();

    let err = store.create("ABC-123", Some("b@y.com")).unwrap_err();
    assert!(matches!(err, StoreError::Duplicate(ref id) if id == "ABC-123"));

    // The original record survives the failed insert intact.
    let records = store.list().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].customer_email.as_deref(), Some("a@x.com"));
    assert_eq!(records[0].status, LicenseStatus::Expired);
}

// ── Status lookup ────────────────────────────────────────────────

#[test]
fn status_of_unknown_license_is_none() {
    let store = store();
    assert_eq!(store.status("NONEXISTENT").unwrap(), None);
}

#[test]
fn status_lookup_is_exact_and_case_sensitive() {
    let store = store();
    store.create("abc-123", None).unwrap();
    assert_eq!(store.status("abc-123").unwrap(), Some(LicenseStatus::Active));
    assert_eq!(store.status("ABC-123").unwrap(), None);
    assert_eq!(store.status(" abc-123").unwrap(), None);
    assert_eq!(store.status("abc-123 ").unwrap(), None);
}

// ── Status updates ───────────────────────────────────────────────

#[test]
fn update_status_on_unknown_license_is_not_found() {
    let store = store();
    for status in [
        LicenseStatus::Active,
        LicenseStatus::Expired,
        LicenseStatus::Cancelled,
    ] {
        let err = store.update_status("MISSING", status).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(ref id) if id == "MISSING"));
    }
}

#[test]
fn update_status_is_visible_on_next_read() {
    let store = store();
    store.create("KEY-1", None).unwrap();
    for status in [
        LicenseStatus::Expired,
        LicenseStatus::Cancelled,
        LicenseStatus::Active,
    ] {
        store.update_status("KEY-1", status).unwrap();
        assert_eq!(store.status("KEY-1").unwrap(), Some(status));
    }
}

#[test]
fn idempotent_transition_succeeds() {
    let store = store();
    store.create("KEY-1", None).unwrap();
    store.update_status("KEY-1", LicenseStatus::Active).unwrap();
    assert_eq!(store.status("KEY-1").unwrap(), Some(LicenseStatus::Active));
}

#[test]
fn cancelled_license_can_be_reactivated() {
    // Transitions are unrestricted among the three values.
    let store = store();
    store.create("KEY-1", None).unwrap();
    store.update_status("KEY-1", LicenseStatus::Cancelled).unwrap();
    store.update_status("KEY-1", LicenseStatus::Active).unwrap();
    assert_eq!(store.status("KEY-1").unwrap(), Some(LicenseStatus::Active));
}

#[test]
fn invalid_status_string_never_reaches_storage() {
    let store = store();
    store.create("KEY-1", None).unwrap();

    let parsed = "revoked".parse::<LicenseStatus>();
    assert!(matches!(parsed, Err(StoreError::InvalidStatus(_))));

    // Nothing was written.
    assert_eq!(store.status("KEY-1").unwrap(), Some(LicenseStatus::Active));
}

// ── Listing ──────────────────────────────────────────────────────

#[test]
fn list_returns_every_record_once_regardless_of_status() {
    let store = store();
    store.create("KEY-A", Some("a@x.com")).unwrap();
    store.create("KEY-B", None).unwrap();
    store.create("KEY-C", Some("c@z.com")).unwrap();
    store.update_status("KEY-B", LicenseStatus::Expired).unwrap();
    store.update_status("KEY-C", LicenseStatus::Cancelled).unwrap();

    let mut ids: Vec<String> = store
        .list()
        .unwrap()
        .into_iter()
        .map(|r| r.license_id)
        .collect();
    ids.sort();
    assert_eq!(ids, vec!["KEY-A", "KEY-B", "KEY-C"]);
}

#[test]
fn list_on_empty_store_is_empty() {
    let store = store();
    assert!(store.list().unwrap().is_empty());
}

// ── Persistence ──────────────────────────────────────────────────

#[test]
fn reopen_preserves_records_and_schema_init_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("licenses.db");

    {
        let store = LicenseStore::open(&path).unwrap();
        store.create("KEY-1", Some("a@x.com")).unwrap();
        store.update_status("KEY-1", LicenseStatus::Expired).unwrap();
    }

    let store = LicenseStore::open(&path).unwrap();
    assert_eq!(store.status("KEY-1").unwrap(), Some(LicenseStatus::Expired));
    let records = store.list().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].customer_email.as_deref(), Some("a@x.com"));
}
