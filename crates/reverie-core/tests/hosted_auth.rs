use reverie_core::auth::error::AuthError;
use reverie_core::auth::{AuthProvider, HostedAuth};
use reverie_http::ServiceClient;
use reverie_model::auth::{Credentials, SignUp};
use serde_json::json;
use test_log::test;
use url::Url;
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USER_ID: &str = "8d1c3f4e-2b7a-4c1e-9f0a-5b6d7e8f9a0b";

fn auth(server: &MockServer) -> HostedAuth {
    HostedAuth::new(ServiceClient::new(Url::parse(&server.uri()).unwrap(), "anon-key").unwrap())
}

fn token_body() -> serde_json::Value {
    json!({
        "access_token": "access-1",
        "token_type": "bearer",
        "expires_in": 3600,
        "expires_at": 1_900_000_000,
        "refresh_token": "refresh-1",
        "user": { "id": USER_ID, "aud": "authenticated", "email": "reader@example.com" }
    })
}

#[test(tokio::test)]
async fn test_sign_in_with_password() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(header("apikey", "anon-key"))
        .and(body_json(json!({ "email": "reader@example.com", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
        .expect(1)
        .mount(&server)
        .await;

    let session = auth(&server)
        .sign_in(&Credentials::new("reader@example.com", "secret"))
        .await
        .unwrap();
    assert_eq!(session.access_token, "access-1");
    assert_eq!(session.refresh_token, "refresh-1");
    assert_eq!(session.user.id, Uuid::parse_str(USER_ID).unwrap());
    assert_eq!(session.expires_at.unwrap().timestamp(), 1_900_000_000);
}

#[test(tokio::test)]
async fn test_invalid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 400,
            "error_code": "invalid_credentials",
            "msg": "Invalid login credentials"
        })))
        .mount(&server)
        .await;

    let result = auth(&server).sign_in(&Credentials::new("reader@example.com", "wrong")).await;
    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
}

#[test(tokio::test)]
async fn test_sign_up_variants() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .and(body_json(json!({ "email": "new@example.com", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": USER_ID,
            "email": "new@example.com",
            "confirmation_sent_at": "2024-05-01T12:00:00Z"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .and(body_json(json!({ "email": "reader@example.com", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .and(body_json(json!({ "email": "taken@example.com", "password": "secret" })))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "code": 422,
            "error_code": "user_already_exists",
            "msg": "User already registered"
        })))
        .mount(&server)
        .await;

    let auth = auth(&server);
    assert!(matches!(
        auth.sign_up(&Credentials::new("new@example.com", "secret")).await,
        Ok(SignUp::ConfirmationRequired { user }) if user.email.as_deref() == Some("new@example.com")
    ));
    assert!(matches!(
        auth.sign_up(&Credentials::new("reader@example.com", "secret")).await,
        Ok(SignUp::SignedIn { session }) if session.access_token == "access-1"
    ));
    assert!(matches!(
        auth.sign_up(&Credentials::new("taken@example.com", "secret")).await,
        Err(AuthError::AlreadyRegistered)
    ));
}

#[test(tokio::test)]
async fn test_weak_password_is_rejected_with_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "code": 422,
            "error_code": "weak_password",
            "msg": "Password should be at least 6 characters."
        })))
        .mount(&server)
        .await;

    let result = auth(&server).sign_up(&Credentials::new("new@example.com", "123")).await;
    assert!(matches!(
        result,
        Err(AuthError::Rejected(message)) if message == "Password should be at least 6 characters."
    ));
}

#[test(tokio::test)]
async fn test_get_user_and_sign_out_use_access_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": USER_ID, "email": "reader@example.com" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("authorization", "Bearer expired"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": 401,
            "error_code": "bad_jwt",
            "msg": "invalid JWT: token is expired"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let auth = auth(&server);
    let user = auth.get_user("access-1").await.unwrap();
    assert_eq!(user.email.as_deref(), Some("reader@example.com"));
    assert!(matches!(auth.get_user("expired").await, Err(AuthError::Unauthorized)));
    auth.sign_out("access-1").await.unwrap();
}

#[test(tokio::test)]
async fn test_refresh() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "refresh_token"))
        .and(body_json(json!({ "refresh_token": "refresh-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "refresh_token"))
        .and(body_json(json!({ "refresh_token": "revoked" })))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid Refresh Token: Refresh Token Not Found"
        })))
        .mount(&server)
        .await;

    let auth = auth(&server);
    assert_eq!(auth.refresh("refresh-1").await.unwrap().access_token, "access-1");
    assert!(matches!(auth.refresh("revoked").await, Err(AuthError::Unauthorized)));
}
