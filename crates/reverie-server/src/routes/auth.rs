pub(crate) mod error;

use crate::routes::auth::error::{AuthErrorType, AuthRouteError};
use crate::routes::error::ErrorBody;
use crate::user::ExtractIdentity;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use axum_auth::AuthBearer;
use http::StatusCode;
use reverie_core::services::Services;
use reverie_model::auth::{AuthUser, Credentials, RefreshRequest, Session, SignUp};
use tracing::instrument;

pub fn create_router<S: Clone + Send + Sync + 'static>() -> Router<S> {
    Router::new()
        .route("/signup", post(sign_up))
        .route("/signin", post(sign_in))
        .route("/refresh", post(refresh))
        .route("/signout", post(sign_out))
        .route("/session", get(get_session))
        .with_state(())
}

#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body = Credentials,
    responses(
        (status = OK, description = "Account created, signed in or waiting for e-mail confirmation", body = SignUp),
        (status = CONFLICT, description = "The e-mail is already registered", body = ErrorBody<AuthErrorType>),
        (status = UNPROCESSABLE_ENTITY, description = "The provider refused the sign-up", body = ErrorBody<AuthErrorType>),
    ),
    tag = "auth"
)]
#[instrument(skip_all)]
pub(crate) async fn sign_up(
    Extension(services): Extension<Services>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<SignUp>, AuthRouteError> {
    Ok(Json(services.auth.sign_up(&credentials).await?))
}

#[utoipa::path(
    post,
    path = "/auth/signin",
    request_body = Credentials,
    responses(
        (status = OK, description = "Signed in", body = Session),
        (status = UNAUTHORIZED, description = "Wrong e-mail or password", body = ErrorBody<AuthErrorType>),
    ),
    tag = "auth"
)]
#[instrument(skip_all)]
pub(crate) async fn sign_in(
    Extension(services): Extension<Services>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<Session>, AuthRouteError> {
    Ok(Json(services.auth.sign_in(&credentials).await?))
}

#[utoipa::path(
    post,
    path = "/auth/refresh",
    request_body = RefreshRequest,
    responses(
        (status = OK, description = "A fresh session", body = Session),
        (status = UNAUTHORIZED, description = "The refresh token is invalid", body = ErrorBody<AuthErrorType>),
    ),
    tag = "auth"
)]
#[instrument(skip_all)]
pub(crate) async fn refresh(
    Extension(services): Extension<Services>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<Session>, AuthRouteError> {
    Ok(Json(services.auth.refresh(&request.refresh_token).await?))
}

#[utoipa::path(
    post,
    path = "/auth/signout",
    responses(
        (status = NO_CONTENT, description = "Session revoked"),
        (status = UNAUTHORIZED, description = "Missing or invalid token", body = ErrorBody<AuthErrorType>),
    ),
    tag = "auth",
    security(
        ("token" = [])
    )
)]
#[instrument(skip_all)]
pub(crate) async fn sign_out(
    Extension(services): Extension<Services>,
    AuthBearer(token): AuthBearer,
) -> Result<impl IntoResponse, AuthRouteError> {
    services.auth.sign_out(&token).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/auth/session",
    responses(
        (status = OK, description = "The user the token belongs to", body = AuthUser),
        (status = UNAUTHORIZED, description = "Missing or invalid token"),
    ),
    tag = "auth",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn get_session(ExtractIdentity(identity): ExtractIdentity) -> Json<AuthUser> {
    Json(identity.user)
}
