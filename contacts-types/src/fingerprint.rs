//! Content fingerprinting for entity tags.
//!
//! The digest input is the string form of every field concatenated in a
//! fixed order with no separator: id, name, title, email, phone number,
//! photo URL. An absent field contributes the text `null`. Field
//! boundaries are not encoded, so records whose fields concatenate to the
//! same text share a tag (`name = "ab", title = "c"` and
//! `name = "a", title = "bc"`). Existing clients hold tags computed this
//! way, so the scheme is kept as is.

use crate::{Contact, EntityTag};
use sha2::{Digest, Sha256};

const ABSENT: &str = "null";

/// Computes the entity tag for a contact's current field values.
#[must_use]
pub fn fingerprint(contact: &Contact) -> EntityTag {
    let fields = [
        &contact.name,
        &contact.title,
        &contact.email,
        &contact.phone_number,
        &contact.photo_url,
    ];

    let mut hasher = Sha256::new();
    hasher.update(contact.id.to_string().as_bytes());
    for field in fields {
        hasher.update(field.as_deref().unwrap_or(ABSENT).as_bytes());
    }
    EntityTag::from_digest(hex::encode(hasher.finalize()))
}
