use crate::routes::error::{ErrorBody, ErrorStatus, IntoErrorBody, error_response};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use reverie_core::auth::error::AuthError;
use serde::Serialize;
use std::error::Error;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub(crate) enum AuthRouteError {
    #[error(transparent)]
    Auth(#[from] AuthError),
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum AuthErrorType {
    InvalidCredentials,
    AlreadyRegistered,
    Unauthorized,
    Rejected,
}

impl ErrorStatus for AuthErrorType {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::AlreadyRegistered => StatusCode::CONFLICT,
            Self::Rejected => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl ErrorStatus for AuthRouteError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Auth(AuthError::Service(_)) => StatusCode::BAD_GATEWAY,
            Self::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoErrorBody for AuthRouteError {
    type Kind = AuthErrorType;

    fn into_error_body(self) -> Option<ErrorBody<AuthErrorType>> {
        let Self::Auth(error) = self;
        let res = match error {
            AuthError::InvalidCredentials => {
                ErrorBody::new(AuthErrorType::InvalidCredentials, "Invalid login credentials")
            }
            AuthError::AlreadyRegistered => ErrorBody::new(AuthErrorType::AlreadyRegistered, "User already registered"),
            AuthError::Unauthorized => ErrorBody::new(
                AuthErrorType::Unauthorized,
                "Not signed in or the session has expired",
            ),
            AuthError::Rejected(message) => ErrorBody::new(AuthErrorType::Rejected, message),
            AuthError::Service(error) => {
                tracing::error!(error = &error as &dyn Error, "auth provider failed");
                return None;
            }
        };
        Some(res)
    }
}

impl IntoResponse for AuthRouteError {
    fn into_response(self) -> Response {
        error_response(self)
    }
}
