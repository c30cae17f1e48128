//! Storage layer for the contacts service.
//!
//! Provides a concurrent in-memory store of contacts keyed by id, plus a
//! JSON snapshot file used to carry the store across process restarts.
//!
//! # Architecture
//!
//! - One coarse `RwLock` covers the record map and the id counter; reads
//!   share it, every mutation takes it exclusively
//! - Records are held behind `Arc` and replaced wholesale, never edited in
//!   place, so a reader holds either the old or the new value
//! - Guarded mutations (`update_if`, `delete_if`) run a caller-supplied
//!   check against the current record under the same write lock
//! - The snapshot file is read once at startup and written once at stop

mod config;
mod error;
mod snapshot;
mod store;

pub use config::{StoreConfig, TitleMatch};
pub use error::{StoreError, StoreResult};
pub use snapshot::SnapshotFile;
pub use store::ContactStore;
