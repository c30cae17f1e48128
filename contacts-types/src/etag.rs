//! HTTP entity tags.
//!
//! An entity tag is an opaque validator rendered between double quotes,
//! optionally prefixed with `W/` to mark it weak. Tags produced by
//! [`crate::fingerprint`] are always strong.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A parsed or generated entity tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityTag {
    opaque: String,
    weak: bool,
}

impl EntityTag {
    /// Creates a strong tag. `opaque` must not contain a double quote.
    pub fn strong(opaque: impl Into<String>) -> Result<Self> {
        Self::build(opaque.into(), false)
    }

    /// Creates a weak tag. `opaque` must not contain a double quote.
    pub fn weak(opaque: impl Into<String>) -> Result<Self> {
        Self::build(opaque.into(), true)
    }

    fn build(opaque: String, weak: bool) -> Result<Self> {
        if opaque.contains('"') {
            return Err(Error::InvalidEntityTag(opaque));
        }
        Ok(Self { opaque, weak })
    }

    /// Hex digests never contain quotes, so construction cannot fail.
    pub(crate) fn from_digest(hex: String) -> Self {
        Self {
            opaque: hex,
            weak: false,
        }
    }

    /// The tag value without quotes or weakness prefix.
    #[must_use]
    pub fn opaque(&self) -> &str {
        &self.opaque
    }

    #[must_use]
    pub fn is_weak(&self) -> bool {
        self.weak
    }

    /// Strong comparison: both tags strong and byte-identical.
    #[must_use]
    pub fn strong_eq(&self, other: &EntityTag) -> bool {
        !self.weak && !other.weak && self.opaque == other.opaque
    }

    /// Weak comparison: opaque values equal regardless of weakness.
    #[must_use]
    pub fn weak_eq(&self, other: &EntityTag) -> bool {
        self.opaque == other.opaque
    }

    /// Parses the header form: `"abc"` or `W/"abc"`.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let (weak, rest) = match s.strip_prefix("W/") {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let opaque = rest
            .strip_prefix('"')
            .and_then(|r| r.strip_suffix('"'))
            .ok_or_else(|| Error::InvalidEntityTag(s.to_string()))?;
        Self::build(opaque.to_string(), weak)
    }
}

impl fmt::Display for EntityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.weak {
            write!(f, "W/\"{}\"", self.opaque)
        } else {
            write!(f, "\"{}\"", self.opaque)
        }
    }
}

impl FromStr for EntityTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
