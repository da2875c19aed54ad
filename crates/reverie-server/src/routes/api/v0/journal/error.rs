use crate::routes::error::{ErrorBody, ErrorStatus, IntoErrorBody, error_response};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use reverie_core::capture::CaptureError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub(crate) enum JournalError {
    #[error(transparent)]
    Capture(#[from] CaptureError),
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum JournalErrorType {
    EmptyContent,
    StoreUnavailable,
}

impl ErrorStatus for JournalErrorType {
    fn status(&self) -> StatusCode {
        match self {
            Self::EmptyContent => StatusCode::BAD_REQUEST,
            Self::StoreUnavailable => StatusCode::BAD_GATEWAY,
        }
    }
}

impl ErrorStatus for JournalError {
    fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoErrorBody for JournalError {
    type Kind = JournalErrorType;

    fn into_error_body(self) -> Option<ErrorBody<JournalErrorType>> {
        let res = match self {
            Self::Capture(CaptureError::EmptyContent) => {
                ErrorBody::new(JournalErrorType::EmptyContent, "Please write something first.")
            }
            Self::Capture(CaptureError::Store(_)) => ErrorBody::new(
                JournalErrorType::StoreUnavailable,
                "Failed to save entry. Please try again.",
            ),
        };
        Some(res)
    }
}

impl IntoResponse for JournalError {
    fn into_response(self) -> Response {
        error_response(self)
    }
}
