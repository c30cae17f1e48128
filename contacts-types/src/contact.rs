//! The contact record.
//!
//! A contact is identified by its [`ContactId`] alone; two records with the
//! same id are the same contact even when every other field differs.
//! Optional fields distinguish "absent" (`None`) from "present but empty"
//! (`Some("")`), and the difference matters both for the entity tag and
//! for merge-updates, where an empty string clears a stored value.

use crate::{ContactId, EntityTag, Result, fingerprint};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A person or organisation in the address book.
///
/// `title` is the display text used in contact lists (a nickname or a
/// company name). It is not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default)]
    pub id: ContactId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl Contact {
    /// Creates an unsaved contact with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Sets the id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<ContactId>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    #[must_use]
    pub fn with_photo_url(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = Some(photo_url.into());
        self
    }

    /// Whether two records denote the same stored contact.
    #[must_use]
    pub fn same_identity(&self, other: &Contact) -> bool {
        self.id == other.id
    }

    /// Computes this record's current entity tag.
    ///
    /// The tag is never cached: any field change yields a new one.
    #[must_use]
    pub fn entity_tag(&self) -> EntityTag {
        fingerprint(self)
    }

    /// Returns a copy of `self` with every field present in `update`
    /// written over it.
    ///
    /// Fields the update leaves absent keep their stored value. A field
    /// supplied as an empty string clears the stored value. The id is
    /// never taken from the update.
    #[must_use]
    pub fn merged(&self, update: &Contact) -> Contact {
        fn pick(update: &Option<String>, current: &Option<String>) -> Option<String> {
            update.as_ref().or(current.as_ref()).cloned()
        }

        Contact {
            id: self.id,
            title: pick(&update.title, &self.title),
            name: pick(&update.name, &self.name),
            email: pick(&update.email, &self.email),
            phone_number: pick(&update.phone_number, &self.phone_number),
            photo_url: pick(&update.photo_url, &self.photo_url),
        }
    }

    /// Decodes a contact from its JSON wire form.
    ///
    /// A missing `id` decodes as [`ContactId::UNASSIGNED`].
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Encodes this contact in its JSON wire form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({})",
            self.id,
            self.name.as_deref().unwrap_or(""),
            self.title.as_deref().unwrap_or("")
        )
    }
}
