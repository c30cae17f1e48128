//! Identifier type for stored contacts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a contact.
///
/// The value `0` is reserved: a record carrying it has not been stored yet
/// and the store assigns a real id on save.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ContactId(u64);

impl ContactId {
    /// The "not yet assigned" id.
    pub const UNASSIGNED: Self = Self(0);

    /// Largest id the store will ever hand out.
    pub const MAX: Self = Self(u64::MAX);

    /// Creates a contact ID from a raw number.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw number.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Whether this id refers to a stored record.
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.0 != 0
    }

    /// The next id in sequence, or `None` at the end of the id space.
    #[must_use]
    pub const fn checked_next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Parses a contact ID from a string.
    pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
        Ok(Self(s.trim().parse()?))
    }
}

impl From<u64> for ContactId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
