//! Store configuration.

use contacts_types::ContactId;
use std::fmt;
use std::str::FromStr;

/// First id handed out when the counter has never been advanced.
pub const DEFAULT_FIRST_ID: u64 = 1000;

/// How `find_by_title` compares the query with stored titles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TitleMatch {
    /// Exact substring match.
    #[default]
    CaseSensitive,
    /// Substring match after lowercasing both sides.
    CaseInsensitive,
}

impl TitleMatch {
    /// Whether `title` contains `query` under this policy.
    #[must_use]
    pub fn matches(&self, title: &str, query: &str) -> bool {
        match self {
            Self::CaseSensitive => title.contains(query),
            Self::CaseInsensitive => title.to_lowercase().contains(&query.to_lowercase()),
        }
    }
}

impl fmt::Display for TitleMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CaseSensitive => f.write_str("case-sensitive"),
            Self::CaseInsensitive => f.write_str("case-insensitive"),
        }
    }
}

impl FromStr for TitleMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "case-sensitive" | "sensitive" => Ok(Self::CaseSensitive),
            "case-insensitive" | "insensitive" => Ok(Self::CaseInsensitive),
            other => Err(format!("unknown title match policy: {other}")),
        }
    }
}

/// Configuration for a [`crate::ContactStore`].
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Substring policy for title searches.
    pub title_match: TitleMatch,
    /// Where id allocation starts. Never zero.
    pub first_id: ContactId,
}

impl StoreConfig {
    /// Sets the title match policy.
    pub fn with_title_match(mut self, title_match: TitleMatch) -> Self {
        self.title_match = title_match;
        self
    }

    /// Sets the first id to allocate. Zero is bumped to one.
    pub fn with_first_id(mut self, first_id: u64) -> Self {
        self.first_id = ContactId::new(first_id.max(1));
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            title_match: TitleMatch::default(),
            first_id: ContactId::new(DEFAULT_FIRST_ID),
        }
    }
}
