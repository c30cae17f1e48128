use contacts_store::{ContactStore, StoreConfig, StoreError, TitleMatch};
use contacts_types::{Contact, ContactId};
use pretty_assertions::assert_eq;

fn id(raw: u64) -> ContactId {
    ContactId::new(raw)
}

fn store_with(contacts: &[Contact]) -> ContactStore {
    let store = ContactStore::default();
    for c in contacts {
        store.save(c.clone()).unwrap();
    }
    store
}

// ── find ─────────────────────────────────────────────────────────

#[test]
fn find_missing_is_none() {
    let store = ContactStore::default();
    assert!(store.find(id(1)).is_none());
    assert!(store.is_empty());
}

#[test]
fn find_returns_copy_of_stored_value() {
    let store = store_with(&[Contact::new("t").with_id(42)]);
    let found = store.find(id(42)).unwrap();
    assert_eq!(found, Contact::new("t").with_id(42));
}

#[test]
fn find_all_is_ordered_by_id() {
    let store = store_with(&[
        Contact::new("c").with_id(30),
        Contact::new("a").with_id(10),
        Contact::new("b").with_id(20),
    ]);
    let ids: Vec<u64> = store.find_all().iter().map(|c| c.id.get()).collect();
    assert_eq!(ids, vec![10, 20, 30]);
}

// ── find_by_title ────────────────────────────────────────────────

#[test]
fn find_by_title_case_sensitive_by_default() {
    let store = store_with(&[
        Contact::new("Work Friend").with_id(1),
        Contact::new("work colleague").with_id(2),
        Contact::new("Family").with_id(3),
    ]);
    let hits: Vec<u64> = store.find_by_title("Work").iter().map(|c| c.id.get()).collect();
    assert_eq!(hits, vec![1]);
}

#[test]
fn find_by_title_case_insensitive_policy() {
    let config = StoreConfig::default().with_title_match(TitleMatch::CaseInsensitive);
    let store = ContactStore::new(config);
    store.save(Contact::new("Work Friend").with_id(1)).unwrap();
    store.save(Contact::new("work colleague").with_id(2)).unwrap();
    store.save(Contact::new("Family").with_id(3)).unwrap();

    let hits: Vec<u64> = store.find_by_title("WORK").iter().map(|c| c.id.get()).collect();
    assert_eq!(hits, vec![1, 2]);
}

#[test]
fn find_by_title_skips_contacts_without_title() {
    let store = store_with(&[Contact::default().with_id(1).with_name("No Title")]);
    assert!(store.find_by_title("").is_empty());
}

#[test]
fn find_by_title_empty_query_matches_every_titled_contact() {
    let store = store_with(&[Contact::new("a").with_id(1), Contact::new("").with_id(2)]);
    assert_eq!(store.find_by_title("").len(), 2);
}

// ── save ─────────────────────────────────────────────────────────

#[test]
fn save_unassigned_allocates_from_first_id() {
    let store = ContactStore::default();
    let first = store.save(Contact::new("a")).unwrap();
    let second = store.save(Contact::new("b")).unwrap();
    assert_eq!(first.id, id(1000));
    assert_eq!(second.id, id(1001));
    assert_eq!(store.find(id(1000)).unwrap().title.as_deref(), Some("a"));
}

#[test]
fn save_allocation_skips_occupied_ids() {
    let store = store_with(&[Contact::new("x").with_id(1000), Contact::new("y").with_id(1001)]);
    let saved = store.save(Contact::new("z")).unwrap();
    assert_eq!(saved.id, id(1002));
    assert_eq!(store.len(), 3);
}

#[test]
fn save_with_client_chosen_id_stores_as_is() {
    let store = ContactStore::default();
    let saved = store.save(Contact::new("mine").with_id(7)).unwrap();
    assert_eq!(saved.id, id(7));
    assert!(store.find(id(7)).is_some());
}

#[test]
fn save_existing_id_replaces_wholesale() {
    let store = store_with(&[Contact::new("old").with_id(5).with_email("old@example.com")]);
    store.save(Contact::new("new").with_id(5)).unwrap();

    let stored = store.find(id(5)).unwrap();
    assert_eq!(stored, Contact::new("new").with_id(5));
    assert_eq!(store.len(), 1);
}

#[test]
fn save_reports_exhausted_id_space() {
    let store = ContactStore::new(StoreConfig::default().with_first_id(u64::MAX));
    let last = store.save(Contact::new("last")).unwrap();
    assert_eq!(last.id, ContactId::MAX);

    let err = store.save(Contact::new("one too many")).unwrap_err();
    assert!(matches!(err, StoreError::IdSpaceExhausted));
    assert_eq!(store.len(), 1);
}

#[test]
fn save_exhausted_when_only_remaining_id_is_taken() {
    let store = ContactStore::new(StoreConfig::default().with_first_id(u64::MAX));
    store.save(Contact::new("taken").with_id(u64::MAX)).unwrap();
    assert!(matches!(
        store.save(Contact::new("x")),
        Err(StoreError::IdSpaceExhausted)
    ));
}

// ── create ───────────────────────────────────────────────────────

#[test]
fn create_rejects_existing_id_and_leaves_store_unchanged() {
    let store = store_with(&[Contact::new("original").with_id(42)]);
    let err = store.create(Contact::new("intruder").with_id(42)).unwrap_err();
    assert!(matches!(err, StoreError::Conflict(c) if c == id(42)));
    assert_eq!(store.find(id(42)).unwrap().title.as_deref(), Some("original"));
}

#[test]
fn create_allocates_for_unassigned() {
    let store = ContactStore::default();
    let created = store.create(Contact::new("fresh")).unwrap();
    assert_eq!(created.id, id(1000));
}

// ── update ───────────────────────────────────────────────────────

#[test]
fn update_missing_fails() {
    let store = ContactStore::default();
    let err = store.update(&Contact::new("x").with_id(9)).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(c) if c == id(9)));
    assert!(store.is_empty());
}

#[test]
fn update_clears_field_with_empty_string() {
    let store = store_with(&[Contact::new("t")
        .with_id(5)
        .with_name("Name")
        .with_email("someone@example.com")]);

    let update = Contact {
        id: id(5),
        email: Some(String::new()),
        ..Contact::default()
    };
    let updated = store.update(&update).unwrap();

    assert_eq!(updated.email.as_deref(), Some(""));
    assert_eq!(updated.name.as_deref(), Some("Name"));
    assert_eq!(updated.title.as_deref(), Some("t"));
    assert_eq!(store.find(id(5)).unwrap(), updated);
}

#[test]
fn update_changes_entity_tag() {
    let store = store_with(&[Contact::new("before").with_id(7)]);
    let before = store.find(id(7)).unwrap().entity_tag();
    let after = store.update(&Contact::new("after").with_id(7)).unwrap().entity_tag();
    assert_ne!(before, after);
}

#[test]
fn update_if_rejected_check_leaves_record_untouched() {
    let store = store_with(&[Contact::new("keep").with_id(7)]);
    let update = Contact::new("lost").with_id(7);
    let result: Result<Contact, StoreError> =
        store.update_if(&update, |_| Err(StoreError::Conflict(id(7))));
    assert!(result.is_err());
    assert_eq!(store.find(id(7)).unwrap().title.as_deref(), Some("keep"));
}

#[test]
fn update_if_check_sees_current_record() {
    let store = store_with(&[Contact::new("current").with_id(7)]);
    let mut seen = None;
    store
        .update_if(&Contact::new("next").with_id(7), |current| {
            seen = current.title.clone();
            Ok::<(), StoreError>(())
        })
        .unwrap();
    assert_eq!(seen.as_deref(), Some("current"));
}

// ── delete ───────────────────────────────────────────────────────

#[test]
fn delete_removes_and_returns_record() {
    let store = store_with(&[Contact::new("gone").with_id(9)]);
    let removed = store.delete(id(9)).unwrap();
    assert_eq!(removed.title.as_deref(), Some("gone"));
    assert!(store.find(id(9)).is_none());
}

#[test]
fn delete_missing_is_noop_failure() {
    let store = store_with(&[Contact::new("stay").with_id(1)]);
    assert!(matches!(store.delete(id(2)), Err(StoreError::NotFound(_))));
    assert_eq!(store.len(), 1);
}

#[test]
fn delete_if_rejected_check_keeps_record() {
    let store = store_with(&[Contact::new("stay").with_id(9)]);
    let result: Result<Contact, StoreError> =
        store.delete_if(id(9), |_| Err(StoreError::Conflict(id(9))));
    assert!(result.is_err());
    assert!(store.find(id(9)).is_some());
}

// ── remove_all / bulk ────────────────────────────────────────────

#[test]
fn remove_all_is_idempotent() {
    let store = store_with(&[Contact::new("a").with_id(1), Contact::new("b").with_id(2)]);
    store.remove_all();
    assert!(store.is_empty());
    store.remove_all();
    assert!(store.is_empty());
}

#[test]
fn remove_all_does_not_rewind_counter() {
    let store = ContactStore::default();
    store.save(Contact::new("a")).unwrap();
    store.remove_all();
    assert_eq!(store.save(Contact::new("b")).unwrap().id, id(1001));
}

#[test]
fn replace_all_swaps_content() {
    let store = store_with(&[Contact::new("old").with_id(1)]);
    store
        .replace_all(vec![Contact::new("x").with_id(10), Contact::new("y").with_id(11)])
        .unwrap();
    let ids: Vec<u64> = store.snapshot().iter().map(|c| c.id.get()).collect();
    assert_eq!(ids, vec![10, 11]);
}

#[test]
fn replace_all_assigns_missing_ids_and_last_duplicate_wins() {
    let store = ContactStore::default();
    store
        .replace_all(vec![
            Contact::new("first").with_id(3),
            Contact::new("no id"),
            Contact::new("second").with_id(3),
        ])
        .unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.find(id(3)).unwrap().title.as_deref(), Some("second"));
    assert_eq!(store.find(id(1000)).unwrap().title.as_deref(), Some("no id"));
}

#[test]
fn replace_all_failure_restores_previous_content() {
    let store = ContactStore::new(StoreConfig::default().with_first_id(u64::MAX));
    store.save(Contact::new("keep").with_id(1)).unwrap();
    let result = store.replace_all(vec![Contact::new("a"), Contact::new("b")]);
    assert!(matches!(result, Err(StoreError::IdSpaceExhausted)));
    let titles: Vec<_> = store.find_all().into_iter().filter_map(|c| c.title).collect();
    assert_eq!(titles, vec!["keep".to_string()]);

    // Ids handed out during the failed call are given back.
    let saved = store.save(Contact::new("c")).unwrap();
    assert_eq!(saved.id, id(u64::MAX));
}
