//! HTTP API for the contacts service.
//!
//! Exposes one resource, `/contacts`, with list/filter, fetch, create,
//! update and delete. Every single-contact response carries an `ETag`
//! computed from the record's fields, and `If-Match` / `If-None-Match`
//! give clients cache validation and optimistic concurrency.
//!
//! | Route                  | Verbs                  |
//! |------------------------|------------------------|
//! | `/contacts[?title=..]` | GET, POST              |
//! | `/contacts/{id}`       | GET, PUT, DELETE       |
//!
//! Other verbs on these routes answer 405.

pub mod conditional;
mod config;
mod error;
pub mod handlers;

use axum::{Router, routing::get};
use contacts_store::ContactStore;
use std::sync::Arc;

pub use conditional::{Decision, Preconditions, TagCondition};
pub use config::{DEFAULT_MAX_AGE, ServerConfig};
pub use error::{ApiError, ApiResult, ErrorBody};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContactStore>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<ContactStore>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

/// Build the HTTP API router over the given store.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/contacts",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route(
            "/contacts/{id}",
            get(handlers::get_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
        .with_state(state)
}
