//! Server configuration.

use contacts_store::{StoreConfig, TitleMatch};
use contacts_types::ContactId;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default `Cache-Control: max-age` in seconds (13 hours).
pub const DEFAULT_MAX_AGE: u32 = 46_800;

/// Configuration for the contacts server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to.
    pub bind_addr: SocketAddr,
    /// Snapshot file loaded at start and written at stop.
    pub data_path: PathBuf,
    /// `max-age` attached to successful responses.
    pub max_age: u32,
    /// Prefix for `Location` headers. Empty yields relative locations.
    pub base_url: String,
    /// Substring policy for `?title=` searches.
    pub title_match: TitleMatch,
}

impl ServerConfig {
    /// Creates a new server configuration.
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            data_path: PathBuf::from("contacts.json"),
            max_age: DEFAULT_MAX_AGE,
            base_url: String::new(),
            title_match: TitleMatch::default(),
        }
    }

    /// Sets the snapshot file path.
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Sets the cache max-age in seconds.
    pub fn with_max_age(mut self, seconds: u32) -> Self {
        self.max_age = seconds;
        self
    }

    /// Sets the `Location` prefix.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the title match policy.
    pub fn with_title_match(mut self, title_match: TitleMatch) -> Self {
        self.title_match = title_match;
        self
    }

    /// Store settings derived from this configuration.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::default().with_title_match(self.title_match)
    }

    /// Value of the `Cache-Control` header.
    pub fn cache_control(&self) -> String {
        format!("max-age={}", self.max_age)
    }

    /// Value of the `Location` header for a stored contact.
    pub fn location(&self, id: ContactId) -> String {
        format!("{}/contacts/{}", self.base_url.trim_end_matches('/'), id)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([127, 0, 0, 1], 8080)))
    }
}
