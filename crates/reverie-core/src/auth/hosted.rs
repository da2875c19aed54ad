use crate::auth::AuthProvider;
use crate::auth::error::AuthError;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reverie_http::{Method, ServiceClient, StatusCode};
use reverie_model::auth::{AuthUser, Credentials, RefreshRequest, Session, SignUp};
use serde::Deserialize;
use std::error::Error;
use tracing::instrument;

const SIGN_UP: &str = "auth/v1/signup";
const TOKEN: &str = "auth/v1/token";
const LOGOUT: &str = "auth/v1/logout";
const USER: &str = "auth/v1/user";

/// Auth provider speaking the GoTrue REST api of the hosted service.
#[derive(Debug, Clone)]
pub struct HostedAuth {
    client: ServiceClient,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    expires_at: Option<i64>,
    #[serde(default)]
    expires_in: Option<i64>,
    user: AuthUser,
}

impl From<TokenResponse> for Session {
    fn from(response: TokenResponse) -> Self {
        let expires_at = response
            .expires_at
            .and_then(|timestamp| DateTime::from_timestamp(timestamp, 0))
            .or_else(|| response.expires_in.map(|seconds| Utc::now() + Duration::seconds(seconds)));
        Session {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            expires_at,
            user: response.user,
        }
    }
}

/// Sign-up answers with a session if the account is confirmed right away, otherwise with the bare user.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(TokenResponse),
    User(AuthUser),
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorBody {
    fn message(&self) -> Option<&str> {
        self.msg
            .as_deref()
            .or(self.error_description.as_deref())
            .or(self.message.as_deref())
    }
}

fn map_error(error: reverie_http::Error) -> AuthError {
    let Some(status) = error.status() else {
        tracing::error!(error = &error as &dyn Error, "auth service unreachable");
        return error.into();
    };
    let body: ErrorBody = error.body().and_then(|body| serde_json::from_str(body).ok()).unwrap_or_default();
    let code = body.error_code.as_deref().or(body.error.as_deref()).unwrap_or_default();
    let message = body.message().unwrap_or_default();

    match code {
        "invalid_credentials" | "invalid_grant" => return AuthError::InvalidCredentials,
        "user_already_exists" | "email_exists" => return AuthError::AlreadyRegistered,
        "bad_jwt" | "session_not_found" | "session_expired" | "refresh_token_not_found" => {
            return AuthError::Unauthorized;
        }
        _ => {}
    }
    if message.contains("already registered") {
        return AuthError::AlreadyRegistered;
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return AuthError::Unauthorized;
    }
    if status.is_client_error() && !message.is_empty() {
        return AuthError::Rejected(message.to_owned());
    }

    tracing::error!(error = &error as &dyn Error, %status, "auth service returned an error");
    error.into()
}

impl HostedAuth {
    #[must_use]
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }

    async fn token(&self, grant_type: &str, body: &impl serde::Serialize) -> Result<Session, AuthError> {
        let request = self
            .client
            .request(Method::POST, TOKEN, None)?
            .query(&[("grant_type", grant_type)])
            .json(body);
        let response: TokenResponse = self.client.send_json(request).await.map_err(map_error)?;
        Ok(response.into())
    }
}

#[async_trait]
impl AuthProvider for HostedAuth {
    #[instrument(skip_all, fields(email = %credentials.email))]
    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUp, AuthError> {
        let request = self.client.request(Method::POST, SIGN_UP, None)?.json(credentials);
        let response: SignUpResponse = self.client.send_json(request).await.map_err(map_error)?;
        Ok(match response {
            SignUpResponse::Session(session) => SignUp::SignedIn {
                session: session.into(),
            },
            SignUpResponse::User(user) => {
                tracing::info!(user_id = %user.id, "sign-up awaits e-mail confirmation");
                SignUp::ConfirmationRequired { user }
            }
        })
    }

    #[instrument(skip_all, fields(email = %credentials.email))]
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        self.token("password", credentials).await
    }

    #[instrument(skip_all)]
    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let request = self.client.request(Method::POST, LOGOUT, Some(access_token))?;
        self.client.send_empty(request).await.map_err(map_error)
    }

    #[instrument(skip_all)]
    async fn get_user(&self, access_token: &str) -> Result<AuthUser, AuthError> {
        let request = self.client.request(Method::GET, USER, Some(access_token))?;
        self.client.send_json(request).await.map_err(map_error)
    }

    #[instrument(skip_all)]
    async fn refresh(&self, refresh_token: &str) -> Result<Session, AuthError> {
        let body = RefreshRequest {
            refresh_token: refresh_token.to_owned(),
        };
        self.token("refresh_token", &body).await.map_err(|error| match error {
            AuthError::InvalidCredentials => AuthError::Unauthorized,
            error => error,
        })
    }
}
