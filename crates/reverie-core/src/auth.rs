pub mod error;
mod hosted;
mod session;

pub use hosted::HostedAuth;
pub use session::{AuthEvent, AuthSession, Observer, Subscription};

use crate::auth::error::AuthError;
use async_trait::async_trait;
use reverie_model::auth::{AuthUser, Credentials, Session, SignUp};
use std::fmt;
use uuid::Uuid;

/// Account operations of the auth provider.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUp, AuthError>;

    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError>;

    /// Revokes the session belonging to `access_token`.
    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;

    /// Resolves the user an access token belongs to. Fails with [`AuthError::Unauthorized`]
    /// if the token is invalid or expired.
    async fn get_user(&self, access_token: &str) -> Result<AuthUser, AuthError>;

    async fn refresh(&self, refresh_token: &str) -> Result<Session, AuthError>;
}

/// An authenticated caller: the user plus the token the entry store checks on their behalf.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    pub user: AuthUser,
    pub access_token: String,
}

impl Identity {
    #[must_use]
    pub fn new(user: AuthUser, access_token: impl Into<String>) -> Self {
        Self {
            user,
            access_token: access_token.into(),
        }
    }

    #[must_use]
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }
}

impl From<&Session> for Identity {
    fn from(session: &Session) -> Self {
        Self::new(session.user.clone(), session.access_token.clone())
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity").field("user", &self.user).finish_non_exhaustive()
    }
}
