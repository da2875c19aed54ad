use super::create_app;
use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use http::{Request, StatusCode, header};
use reverie_core::analyzer::FallbackAnalyzer;
use reverie_core::auth::error::AuthError;
use reverie_core::auth::{AuthProvider, Identity};
use reverie_core::services::Services;
use reverie_core::store::error::StoreError;
use reverie_core::store::{EntryStore, MemoryEntryStore};
use reverie_model::auth::{AuthUser, Credentials, Session, SignUp};
use reverie_model::journal::JournalEntry;
use reverie_model::journal::partial::NewJournalEntry;
use reverie_test_helpers::fixtures::{EntryFixtureExt, entry};
use serde_json::{Value, json};
use std::sync::Arc;
use test_log::test;
use tower::ServiceExt;
use uuid::Uuid;

const USER_ID: Uuid = Uuid::from_u128(0xfeed);
const TOKEN: &str = "valid-token";

fn user() -> AuthUser {
    AuthUser {
        id: USER_ID,
        email: Some("reader@example.com".to_owned()),
    }
}

fn session() -> Session {
    Session {
        access_token: TOKEN.to_owned(),
        refresh_token: "refresh".to_owned(),
        expires_at: None,
        user: user(),
    }
}

struct FakeAuth;

#[async_trait]
impl AuthProvider for FakeAuth {
    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUp, AuthError> {
        match credentials.email.as_str() {
            "taken@example.com" => Err(AuthError::AlreadyRegistered),
            _ => Ok(SignUp::ConfirmationRequired { user: user() }),
        }
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        if credentials.password == "secret" {
            Ok(session())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        self.get_user(access_token).await.map(drop)
    }

    async fn get_user(&self, access_token: &str) -> Result<AuthUser, AuthError> {
        if access_token == TOKEN {
            Ok(user())
        } else {
            Err(AuthError::Unauthorized)
        }
    }

    async fn refresh(&self, _refresh_token: &str) -> Result<Session, AuthError> {
        Err(AuthError::Unauthorized)
    }
}

struct BrokenStore;

#[async_trait]
impl EntryStore for BrokenStore {
    async fn insert(&self, _identity: &Identity, _entry: NewJournalEntry) -> Result<JournalEntry, StoreError> {
        Err(StoreError::EmptyResponse)
    }

    async fn list(&self, _identity: &Identity) -> Result<Vec<JournalEntry>, StoreError> {
        Err(StoreError::EmptyResponse)
    }

    fn backend(&self) -> &'static str {
        "broken"
    }
}

fn app_with_store(store: Arc<dyn EntryStore>) -> Router {
    let services = Services::new(Arc::new(FakeAuth), store, Arc::new(FallbackAnalyzer));
    create_app(services, &["http://localhost:5173".to_owned()]).unwrap()
}

fn app() -> Router {
    app_with_store(Arc::new(MemoryEntryStore::with_entries(vec![
        entry(USER_ID, 0, "Long walk by the river.").with_mood("calm"),
        entry(USER_ID, 10, "Grateful for my sister.").with_mood("grateful"),
        entry(Uuid::new_v4(), 20, "Someone else's entry.").with_mood("calm"),
    ])))
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut request = Request::get(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    request.body(Body::empty()).unwrap()
}

fn post(uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut request = Request::post(uri).header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    request.body(Body::from(body.to_string())).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[test(tokio::test)]
async fn test_status_and_moods() {
    let (status, body) = send(app(), get("/api/v0/status", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["analysis"], "fallback");
    assert_eq!(body["entry_backend"], "memory");

    let (status, body) = send(app(), get("/api/v0/journal/moods", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 12);
    assert_eq!(body[0], "happy");
}

#[test(tokio::test)]
async fn test_entries_require_a_valid_token() {
    let (status, _) = send(app(), get("/api/v0/journal/entries", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(app(), get("/api/v0/journal/entries", Some("forged"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[test(tokio::test)]
async fn test_timeline_is_scoped_and_filtered() {
    let (status, body) = send(app(), get("/api/v0/journal/entries", Some(TOKEN))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "entries");
    assert_eq!(body["total"], 2);
    assert_eq!(body["moods"], json!(["grateful", "calm"]));
    assert_eq!(body["entries"][0]["content"], "Grateful for my sister.");

    let (_, body) = send(app(), get("/api/v0/journal/entries?mood=calm", Some(TOKEN))).await;
    assert_eq!(body["entries"].as_array().unwrap().len(), 1);
    assert_eq!(body["entries"][0]["content"], "Long walk by the river.");

    let (_, body) = send(app(), get("/api/v0/journal/entries?search=RIVER&mood=grateful", Some(TOKEN))).await;
    assert_eq!(body["state"], "no_matches");
    assert_eq!(body["entries"], json!([]));
}

#[test(tokio::test)]
async fn test_create_entry_uses_fallback_analysis() {
    let store = Arc::new(MemoryEntryStore::new());
    let app = app_with_store(store.clone());

    let (status, body) = send(
        app.clone(),
        post(
            "/api/v0/journal/entries",
            Some(TOKEN),
            &json!({ "title": " First ", "content": "Today was a good day" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], "First");
    assert_eq!(body["mood"], "reflective");
    assert_eq!(body["summary"], "A personal reflection and thoughts.");
    assert_eq!(body["user_id"], USER_ID.to_string());

    let (_, timeline) = send(app, get("/api/v0/journal/entries", Some(TOKEN))).await;
    assert_eq!(timeline["entries"][0]["id"], body["id"]);
}

#[test(tokio::test)]
async fn test_create_entry_errors() {
    let (status, body) = send(
        app(),
        post("/api/v0/journal/entries", Some(TOKEN), &json!({ "content": "  \n " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "empty_content");

    let (status, body) = send(
        app_with_store(Arc::new(BrokenStore)),
        post("/api/v0/journal/entries", Some(TOKEN), &json!({ "content": "Hello" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "store_unavailable");
    assert_eq!(body["error_description"], "Failed to save entry. Please try again.");
}

#[test(tokio::test)]
async fn test_broken_store_yields_empty_timeline() {
    let (status, body) = send(
        app_with_store(Arc::new(BrokenStore)),
        get("/api/v0/journal/entries", Some(TOKEN)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "empty");
}

#[test(tokio::test)]
async fn test_auth_routes() {
    let credentials = json!({ "email": "reader@example.com", "password": "secret" });
    let (status, body) = send(app(), post("/auth/signin", None, &credentials)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["access_token"], TOKEN);

    let wrong = json!({ "email": "reader@example.com", "password": "nope" });
    let (status, body) = send(app(), post("/auth/signin", None, &wrong)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid_credentials");

    let taken = json!({ "email": "taken@example.com", "password": "secret" });
    let (status, body) = send(app(), post("/auth/signup", None, &taken)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "already_registered");

    let (status, body) = send(app(), post("/auth/signup", None, &credentials)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "confirmation_required");

    let (status, body) = send(app(), get("/auth/session", Some(TOKEN))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], USER_ID.to_string());

    let (status, _) = send(app(), post("/auth/signout", Some(TOKEN), &Value::Null)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(
        app(),
        post("/auth/refresh", None, &json!({ "refresh_token": "stale" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unauthorized");
}

#[test(tokio::test)]
async fn test_openapi_document_is_served() {
    let (status, body) = send(app(), get("/api-docs/openapi.json", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v0/journal/entries"].is_object());
    assert!(body["components"]["securitySchemes"]["token"].is_object());
}
