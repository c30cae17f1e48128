//! Request handlers for the `/contacts` resource.
//!
//! Each handler fingerprints the relevant record, runs the conditional
//! evaluator against the request headers and only then touches the store.
//! PUT and DELETE evaluate inside the store's write lock, so the tag they
//! check is the tag of the record they modify.
//!
//! Successful responses carry `Cache-Control`. DELETE answers 200 with no
//! `ETag`, since nothing is left to validate.

use crate::AppState;
use crate::conditional::{Decision, Preconditions};
use crate::error::{ApiError, ApiResult};
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use contacts_types::{Contact, ContactId, EntityTag};
use serde::Deserialize;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub title: Option<String>,
}

fn decode(body: &Bytes) -> ApiResult<Contact> {
    Contact::from_json_slice(body)
        .map_err(|e| ApiError::Validation(format!("malformed contact: {e}")))
}

/// Turns anything but `Proceed` into a 412.
fn require_proceed(decision: Decision, id: ContactId) -> ApiResult<()> {
    match decision {
        Decision::Proceed => Ok(()),
        Decision::NotModified | Decision::PreconditionFailed => {
            warn!("Precondition failed for contact {}", id);
            Err(ApiError::PreconditionFailed(format!("contact {id}")))
        }
    }
}

fn cache_headers(state: &AppState, tag: &EntityTag) -> [(HeaderName, String); 2] {
    [
        (header::ETAG, tag.to_string()),
        (header::CACHE_CONTROL, state.config.cache_control()),
    ]
}

/// `GET /contacts[?title=...]`
pub async fn list_contacts(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<Contact>>> {
    let contacts = match query.title.as_deref() {
        Some(title) => state.store.find_by_title(title),
        None => state.store.find_all(),
    };
    if contacts.is_empty() {
        return Err(ApiError::NotFound(match query.title {
            Some(title) => format!("no contacts with title matching {title:?}"),
            None => "no contacts".to_string(),
        }));
    }
    debug!("Listing {} contacts", contacts.len());
    Ok(Json(contacts))
}

/// `GET /contacts/{id}`
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<ContactId>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let contact = state
        .store
        .find(id)
        .ok_or_else(|| ApiError::NotFound(format!("contact {id}")))?;
    let tag = contact.entity_tag();

    match Preconditions::from_headers(&headers).evaluate(&Method::GET, &tag) {
        Decision::Proceed => {
            Ok((StatusCode::OK, cache_headers(&state, &tag), Json(contact)).into_response())
        }
        Decision::NotModified => {
            debug!("Contact {} not modified", id);
            Ok((StatusCode::NOT_MODIFIED, cache_headers(&state, &tag)).into_response())
        }
        Decision::PreconditionFailed => {
            warn!("Precondition failed for contact {}", id);
            Err(ApiError::PreconditionFailed(format!("contact {id}")))
        }
    }
}

/// `POST /contacts`
pub async fn create_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Response> {
    let candidate = decode(&body)?;
    if candidate.id.is_assigned() && state.store.find(candidate.id).is_some() {
        return Err(ApiError::Conflict(format!("contact {} already exists", candidate.id)));
    }

    let decision =
        Preconditions::from_headers(&headers).evaluate(&Method::POST, &candidate.entity_tag());
    require_proceed(decision, candidate.id)?;

    // A concurrent create of the same id between the check above and here
    // surfaces as a conflict from the store.
    let created = state.store.create(candidate)?;
    let tag = created.entity_tag();
    info!("Created contact {}", created.id);

    let location = state.config.location(created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        cache_headers(&state, &tag),
        Json(created),
    )
        .into_response())
}

/// `PUT /contacts/{id}`
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<ContactId>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Response> {
    let candidate = decode(&body)?;
    if candidate.id != id {
        return Err(ApiError::Validation(format!(
            "body id {} does not match path id {}",
            candidate.id, id
        )));
    }

    let preconditions = Preconditions::from_headers(&headers);
    let updated = state.store.update_if(&candidate, |current| {
        require_proceed(preconditions.evaluate(&Method::PUT, &current.entity_tag()), id)
    })?;
    let tag = updated.entity_tag();
    info!("Updated contact {}", id);

    Ok((StatusCode::OK, cache_headers(&state, &tag), Json(updated)).into_response())
}

/// `DELETE /contacts/{id}`
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<ContactId>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let preconditions = Preconditions::from_headers(&headers);
    state.store.delete_if(id, |current| {
        require_proceed(preconditions.evaluate(&Method::DELETE, &current.entity_tag()), id)
    })?;
    info!("Deleted contact {}", id);
    Ok((
        StatusCode::OK,
        [(header::CACHE_CONTROL, state.config.cache_control())],
    )
        .into_response())
}
