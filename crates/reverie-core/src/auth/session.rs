use crate::auth::error::AuthError;
use crate::auth::{AuthProvider, Identity};
use chrono::Utc;
use reverie_model::auth::{Credentials, Session, SignUp};
use std::error::Error;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn(Session),
    SignedOut,
}

impl From<Option<Session>> for AuthEvent {
    fn from(session: Option<Session>) -> Self {
        session.map_or(AuthEvent::SignedOut, AuthEvent::SignedIn)
    }
}

/// Client side holder of the current session.
///
/// Every change is broadcast to subscribers. Subscriptions and observers unregister
/// themselves when dropped.
pub struct AuthSession {
    provider: Arc<dyn AuthProvider>,
    state: watch::Sender<Option<Session>>,
}

/// Receives session changes until dropped.
#[derive(Debug)]
pub struct Subscription {
    receiver: watch::Receiver<Option<Session>>,
}

impl Subscription {
    /// Waits for the next change. Returns `None` once the session holder is gone.
    pub async fn changed(&mut self) -> Option<AuthEvent> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone().into())
    }

    /// The latest change not seen yet, without waiting.
    pub fn try_next(&mut self) -> Option<AuthEvent> {
        if !self.receiver.has_changed().ok()? {
            return None;
        }
        Some(self.receiver.borrow_and_update().clone().into())
    }
}

/// Runs a callback for every session change. Dropping the guard stops it.
#[derive(Debug)]
pub struct Observer {
    task: JoinHandle<()>,
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl AuthSession {
    #[must_use]
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        Self {
            provider,
            state: watch::Sender::new(None),
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        self.state.borrow().as_ref().map(Identity::from)
    }

    #[must_use]
    pub fn subscribe(&self) -> Subscription {
        Subscription {
            receiver: self.state.subscribe(),
        }
    }

    /// Spawns a task calling `callback` for every change. Needs a tokio runtime.
    pub fn on_change<F>(&self, mut callback: F) -> Observer
    where
        F: FnMut(AuthEvent) + Send + 'static,
    {
        let mut subscription = self.subscribe();
        let task = tokio::spawn(async move {
            while let Some(event) = subscription.changed().await {
                callback(event);
            }
        });
        Observer { task }
    }

    /// Number of live subscriptions, observers included.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.receiver_count()
    }

    pub fn set(&self, session: Option<Session>) {
        self.state.send_replace(session);
    }

    pub async fn sign_up(&self, credentials: &Credentials) -> Result<SignUp, AuthError> {
        let sign_up = self.provider.sign_up(credentials).await?;
        if let SignUp::SignedIn { session } = &sign_up {
            self.set(Some(session.clone()));
        }
        Ok(sign_up)
    }

    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let session = self.provider.sign_in(credentials).await?;
        tracing::info!(user_id = %session.user.id, "signed in");
        self.set(Some(session.clone()));
        Ok(session)
    }

    /// Forgets the local session even if revoking it remotely fails.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        let Some(session) = self.state.send_replace(None) else {
            return Ok(());
        };
        self.provider
            .sign_out(&session.access_token)
            .await
            .or_else(|error| match error {
                AuthError::Unauthorized => Ok(()),
                error => Err(error),
            })
            .inspect_err(|error| {
                tracing::warn!(error = error as &dyn Error, "failed to revoke session");
            })
    }

    /// Takes over a previously stored session after checking it with the provider.
    ///
    /// Expired or rejected sessions are refreshed once; if that fails the holder stays signed out.
    pub async fn restore(&self, session: Session) -> Result<Session, AuthError> {
        let session = if session.is_expired(Utc::now()) {
            tracing::debug!("stored session expired, refreshing");
            self.provider.refresh(&session.refresh_token).await?
        } else {
            match self.provider.get_user(&session.access_token).await {
                Ok(user) => Session { user, ..session },
                Err(AuthError::Unauthorized) => {
                    tracing::debug!("stored session rejected, refreshing");
                    self.provider.refresh(&session.refresh_token).await?
                }
                Err(error) => return Err(error),
            }
        };
        self.set(Some(session.clone()));
        Ok(session)
    }
}
