//! Core type definitions for the contacts service.
//!
//! This crate defines the record that every other layer passes around:
//! - [`ContactId`]: numeric identity, `0` meaning "not yet assigned"
//! - [`Contact`]: the record itself and its merge-update rule
//! - [`EntityTag`]: quoted HTTP validator, strong or weak
//! - [`fingerprint`]: the deterministic content hash behind every tag
//!
//! Nothing here knows about locking, files or HTTP routing.

mod contact;
mod etag;
mod fingerprint;
mod ids;

pub use contact::Contact;
pub use etag::EntityTag;
pub use fingerprint::fingerprint;
pub use ids::ContactId;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid contact id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("invalid entity tag: {0}")]
    InvalidEntityTag(String),
}
