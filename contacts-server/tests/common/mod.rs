//! Shared helpers for API tests.

#![allow(dead_code)]

use contacts_server::{AppState, ServerConfig, build_router};
use contacts_store::ContactStore;
use contacts_types::Contact;
use std::sync::Arc;

/// A running server plus a handle on its store.
pub struct TestServer {
    pub base: String,
    pub store: Arc<ContactStore>,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// POSTs `contact` and returns the response.
    pub async fn post(&self, contact: &Contact) -> reqwest::Response {
        self.client
            .post(self.url("/contacts"))
            .json(contact)
            .send()
            .await
            .unwrap()
    }

    /// GETs `/contacts/{id}` and returns the response.
    pub async fn get(&self, id: u64) -> reqwest::Response {
        self.client
            .get(self.url(&format!("/contacts/{id}")))
            .send()
            .await
            .unwrap()
    }
}

/// Spin up the HTTP server on an OS-assigned port.
pub async fn spawn_test_server() -> TestServer {
    spawn_with_config(ServerConfig::default()).await
}

pub async fn spawn_with_config(config: ServerConfig) -> TestServer {
    let store = Arc::new(ContactStore::new(config.store_config()));
    let app = build_router(AppState::new(Arc::clone(&store), config));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestServer {
        base: format!("http://127.0.0.1:{}", port),
        store,
        client: reqwest::Client::new(),
    }
}

/// The `ETag` header of a response, as sent.
pub fn etag(resp: &reqwest::Response) -> String {
    resp.headers()
        .get("etag")
        .expect("response has no ETag")
        .to_str()
        .unwrap()
        .to_string()
}
