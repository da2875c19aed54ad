use http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Reqwest client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Invalid service url: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Token is not a valid header value")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),
}

impl Error {
    /// Status code of a non-success response, if this error is one.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Client(error) => error.status(),
            Self::Url(_) | Self::Json(_) | Self::InvalidHeader(_) => None,
        }
    }

    /// Body of a non-success response.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}
