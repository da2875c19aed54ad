use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;
use std::borrow::Cow;
use utoipa::ToSchema;

pub(crate) trait ErrorStatus {
    fn status(&self) -> StatusCode;
}

/// JSON body of a failed request: a machine readable kind plus a message meant for the user.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ErrorBody<K> {
    pub(crate) error: K,
    pub(crate) error_description: Cow<'static, str>,
}

impl<K> ErrorBody<K> {
    pub(crate) fn new(kind: K, description: impl Into<Cow<'static, str>>) -> Self {
        Self {
            error: kind,
            error_description: description.into(),
        }
    }
}

/// A route error the client may learn about. Returning `None` leaves only the bare status.
pub(crate) trait IntoErrorBody: ErrorStatus + Sized {
    type Kind: ErrorStatus + Serialize;

    fn into_error_body(self) -> Option<ErrorBody<Self::Kind>>;
}

/// Responds with the status of the error kind and the body, or with the status of the error itself.
pub(crate) fn error_response<E: IntoErrorBody>(error: E) -> Response {
    let bare = error.status();
    match error.into_error_body() {
        Some(body) => (body.error.status(), Json(body)).into_response(),
        None => bare.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use test_log::test;

    #[derive(Debug, Serialize)]
    #[serde(rename_all = "snake_case")]
    enum Kind {
        TooLong,
    }

    impl ErrorStatus for Kind {
        fn status(&self) -> StatusCode {
            StatusCode::PAYLOAD_TOO_LARGE
        }
    }

    enum Failure {
        Visible,
        Hidden,
    }

    impl ErrorStatus for Failure {
        fn status(&self) -> StatusCode {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }

    impl IntoErrorBody for Failure {
        type Kind = Kind;

        fn into_error_body(self) -> Option<ErrorBody<Kind>> {
            match self {
                Self::Visible => Some(ErrorBody::new(Kind::TooLong, "Entry is too long")),
                Self::Hidden => None,
            }
        }
    }

    #[test(tokio::test)]
    async fn test_body_status_wins_over_error_status() {
        let response = error_response(Failure::Visible);
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "too_long", "error_description": "Entry is too long" }));
    }

    #[test(tokio::test)]
    async fn test_hidden_errors_have_no_body() {
        let response = error_response(Failure::Hidden);
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(to_bytes(response.into_body(), usize::MAX).await.unwrap().is_empty());
    }
}
