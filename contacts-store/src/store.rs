//! Concurrent contact store.

use crate::{StoreConfig, StoreError, StoreResult, TitleMatch};
use contacts_types::{Contact, ContactId};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Thread-safe store of contacts keyed by id.
///
/// Construct one per process and share it behind an `Arc`. Every method
/// hands out copies; the stored values stay owned by the store.
pub struct ContactStore {
    state: RwLock<State>,
    title_match: TitleMatch,
}

struct State {
    contacts: BTreeMap<ContactId, Arc<Contact>>,
    /// Next candidate for allocation. `None` once the id space is spent.
    next_id: Option<ContactId>,
}

impl State {
    /// Hands out the next free id, skipping any already occupied.
    fn allocate_id(&mut self) -> StoreResult<ContactId> {
        let mut candidate = self.next_id.ok_or(StoreError::IdSpaceExhausted)?;
        loop {
            let following = candidate.checked_next();
            if !self.contacts.contains_key(&candidate) {
                self.next_id = following;
                return Ok(candidate);
            }
            match following {
                Some(next) => candidate = next,
                None => {
                    self.next_id = None;
                    return Err(StoreError::IdSpaceExhausted);
                }
            }
        }
    }

    /// Inserts `contact`, assigning an id first if it has none.
    fn insert(&mut self, mut contact: Contact) -> StoreResult<Contact> {
        if !contact.id.is_assigned() {
            contact.id = self.allocate_id()?;
            debug!("assigned contact id {}", contact.id);
        }
        self.contacts.insert(contact.id, Arc::new(contact.clone()));
        Ok(contact)
    }
}

impl ContactStore {
    /// Creates an empty store.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            state: RwLock::new(State {
                contacts: BTreeMap::new(),
                next_id: Some(config.first_id),
            }),
            title_match: config.title_match,
        }
    }

    /// The substring policy used by [`Self::find_by_title`].
    pub fn title_match(&self) -> TitleMatch {
        self.title_match
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.state.read().contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().contacts.is_empty()
    }

    // ── Reads ────────────────────────────────────────────────────

    /// Looks up a contact by id.
    pub fn find(&self, id: ContactId) -> Option<Contact> {
        self.state
            .read()
            .contacts
            .get(&id)
            .map(|c| Contact::clone(c))
    }

    /// All contacts, ordered by id.
    pub fn find_all(&self) -> Vec<Contact> {
        self.state
            .read()
            .contacts
            .values()
            .map(|c| Contact::clone(c))
            .collect()
    }

    /// Contacts whose title contains `query`, ordered by id.
    ///
    /// Contacts without a title never match.
    pub fn find_by_title(&self, query: &str) -> Vec<Contact> {
        let policy = self.title_match;
        self.state
            .read()
            .contacts
            .values()
            .filter(|c| c.title.as_deref().is_some_and(|t| policy.matches(t, query)))
            .map(|c| Contact::clone(c))
            .collect()
    }

    // ── Writes ───────────────────────────────────────────────────

    /// Inserts or replaces a contact.
    ///
    /// With an unassigned id the next free id is allocated. With an
    /// assigned id the record is stored as-is, replacing any existing
    /// record with that id. Returns the stored value.
    pub fn save(&self, contact: Contact) -> StoreResult<Contact> {
        self.state.write().insert(contact)
    }

    /// Inserts a contact only if its id is free.
    ///
    /// Unassigned ids are allocated as in [`Self::save`]. An assigned id that
    /// is already present fails with [`StoreError::Conflict`] and leaves the
    /// store untouched.
    pub fn create(&self, contact: Contact) -> StoreResult<Contact> {
        let mut state = self.state.write();
        if contact.id.is_assigned() && state.contacts.contains_key(&contact.id) {
            return Err(StoreError::Conflict(contact.id));
        }
        state.insert(contact)
    }

    /// Merges `update` into the stored contact with the same id.
    ///
    /// See [`Contact::merged`] for the per-field rule. Returns the new
    /// stored value.
    pub fn update(&self, update: &Contact) -> StoreResult<Contact> {
        self.update_if(update, |_| Ok::<(), StoreError>(()))
    }

    /// Like [`Self::update`], but first runs `check` on the current record
    /// while holding the write lock. An `Err` from `check` aborts the update
    /// and is returned unchanged.
    pub fn update_if<E, F>(&self, update: &Contact, check: F) -> Result<Contact, E>
    where
        E: From<StoreError>,
        F: FnOnce(&Contact) -> Result<(), E>,
    {
        let mut state = self.state.write();
        let current = state
            .contacts
            .get(&update.id)
            .ok_or(StoreError::NotFound(update.id))?;
        check(current)?;

        let merged = current.merged(update);
        state.contacts.insert(merged.id, Arc::new(merged.clone()));
        Ok(merged)
    }

    /// Removes a contact. Returns the removed value.
    pub fn delete(&self, id: ContactId) -> StoreResult<Contact> {
        self.delete_if(id, |_| Ok::<(), StoreError>(()))
    }

    /// Like [`Self::delete`], but first runs `check` on the current record
    /// while holding the write lock.
    pub fn delete_if<E, F>(&self, id: ContactId, check: F) -> Result<Contact, E>
    where
        E: From<StoreError>,
        F: FnOnce(&Contact) -> Result<(), E>,
    {
        let mut state = self.state.write();
        let current = state.contacts.get(&id).ok_or(StoreError::NotFound(id))?;
        check(current)?;

        let removed = state.contacts.remove(&id).ok_or(StoreError::NotFound(id))?;
        Ok(Arc::unwrap_or_clone(removed))
    }

    /// Removes every contact. The id counter is not rewound.
    pub fn remove_all(&self) {
        self.state.write().contacts.clear();
    }

    // ── Bulk ─────────────────────────────────────────────────────

    /// Point-in-time copy of every contact, ordered by id.
    pub fn snapshot(&self) -> Vec<Contact> {
        self.find_all()
    }

    /// Replaces the whole content of the store.
    ///
    /// Records without an id get one allocated; a later record with the
    /// same id as an earlier one wins.
    pub fn replace_all(&self, contacts: impl IntoIterator<Item = Contact>) -> StoreResult<()> {
        let mut state = self.state.write();
        let previous = std::mem::take(&mut state.contacts);
        let previous_next_id = state.next_id;
        for contact in contacts {
            if let Err(e) = state.insert(contact) {
                state.contacts = previous;
                state.next_id = previous_next_id;
                return Err(e);
            }
        }
        Ok(())
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
