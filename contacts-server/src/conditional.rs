//! Conditional request evaluation.
//!
//! Decides whether a request may proceed given the entity tag of the
//! relevant record and the client's `If-Match` / `If-None-Match` headers.
//! `If-Match` is checked first with strong comparison; a mismatch fails
//! the request. `If-None-Match` is checked next with weak comparison; a
//! match yields 304 for GET and HEAD and fails every other method.
//!
//! Which tag is "relevant" is the caller's business: the stored record for
//! GET, PUT and DELETE, the not-yet-saved candidate for POST.

use axum::http::{HeaderMap, Method, header};
use contacts_types::EntityTag;

/// Outcome of evaluating preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Carry on with the request.
    Proceed,
    /// Answer 304 with no body.
    NotModified,
    /// Answer 412.
    PreconditionFailed,
}

/// The parsed value of one conditional header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagCondition {
    /// `*`, matching any current representation.
    Any,
    /// A list of tags. Entries that failed to parse are dropped, so an
    /// all-garbage header is an empty list that matches nothing.
    Tags(Vec<EntityTag>),
}

impl TagCondition {
    /// Parses a header value: `*`, or a comma-separated list of quoted tags.
    pub fn parse(value: &str) -> Self {
        if value.trim() == "*" {
            return Self::Any;
        }
        Self::Tags(
            value
                .split(',')
                .filter_map(|part| EntityTag::parse(part).ok())
                .collect(),
        )
    }

    fn matches_strong(&self, current: &EntityTag) -> bool {
        match self {
            Self::Any => true,
            Self::Tags(tags) => tags.iter().any(|t| t.strong_eq(current)),
        }
    }

    fn matches_weak(&self, current: &EntityTag) -> bool {
        match self {
            Self::Any => true,
            Self::Tags(tags) => tags.iter().any(|t| t.weak_eq(current)),
        }
    }

    /// Merges every instance of `name` in `headers` into one condition.
    fn from_headers(headers: &HeaderMap, name: header::HeaderName) -> Option<Self> {
        let mut values = headers.get_all(name).iter().peekable();
        values.peek()?;

        let mut tags = Vec::new();
        for value in values {
            // Non-UTF-8 values cannot hold a valid tag but still count as present.
            let Ok(text) = value.to_str() else { continue };
            match Self::parse(text) {
                Self::Any => return Some(Self::Any),
                Self::Tags(parsed) => tags.extend(parsed),
            }
        }
        Some(Self::Tags(tags))
    }
}

/// The conditional headers of one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preconditions {
    pub if_match: Option<TagCondition>,
    pub if_none_match: Option<TagCondition>,
}

impl Preconditions {
    /// Extracts `If-Match` and `If-None-Match` from request headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            if_match: TagCondition::from_headers(headers, header::IF_MATCH),
            if_none_match: TagCondition::from_headers(headers, header::IF_NONE_MATCH),
        }
    }

    /// Evaluates the preconditions of a `method` request against `current`.
    pub fn evaluate(&self, method: &Method, current: &EntityTag) -> Decision {
        if let Some(condition) = &self.if_match {
            if !condition.matches_strong(current) {
                return Decision::PreconditionFailed;
            }
        }
        if let Some(condition) = &self.if_none_match {
            if condition.matches_weak(current) {
                return if *method == Method::GET || *method == Method::HEAD {
                    Decision::NotModified
                } else {
                    Decision::PreconditionFailed
                };
            }
        }
        Decision::Proceed
    }
}
