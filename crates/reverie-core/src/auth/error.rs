use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid login credentials")]
    InvalidCredentials,

    #[error("User already registered")]
    AlreadyRegistered,

    #[error("Not signed in or the session has expired")]
    Unauthorized,

    /// The provider refused the request, e.g. because the password is too weak.
    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Service(#[from] reverie_http::Error),
}
