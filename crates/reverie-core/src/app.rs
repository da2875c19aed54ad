use crate::auth::error::AuthError;
use crate::auth::{AuthEvent, AuthSession, Identity, Subscription};
use crate::capture::{CaptureError, CaptureWorkflow};
use crate::services::Services;
use crate::timeline::{self, TimelineQuery, TimelineView};
use reverie_model::auth::{Credentials, Session, SignUp};
use reverie_model::journal::JournalEntry;
use reverie_model::journal::partial::JournalEntryDraft;
use reverie_model::timeline::EntryFilter;
use strum::Display;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum View {
    Auth,
    Write,
    Timeline,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Please sign in first")]
    NotSignedIn,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Capture(#[from] CaptureError),
}

/// State of the interactive journal: which view is shown, the draft being written and the
/// timeline with its filter.
///
/// Without a session only the auth view is reachable. The view follows the session through
/// a subscription held for the lifetime of the app.
pub struct JournalApp {
    session: AuthSession,
    session_events: Subscription,
    capture: CaptureWorkflow,
    timeline: TimelineQuery,
    view: View,
    draft: JournalEntryDraft,
    filter: EntryFilter,
    entries: Vec<JournalEntry>,
}

impl JournalApp {
    #[must_use]
    pub fn new(services: &Services) -> Self {
        let session = AuthSession::new(services.auth.clone());
        Self {
            session_events: session.subscribe(),
            session,
            capture: services.capture(),
            timeline: services.timeline(),
            view: View::Auth,
            draft: JournalEntryDraft::default(),
            filter: EntryFilter::default(),
            entries: vec![],
        }
    }

    #[must_use]
    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        self.session.identity()
    }

    fn require_identity(&self) -> Result<Identity, AppError> {
        self.identity().ok_or(AppError::NotSignedIn)
    }

    /// Applies a pending session change: signing out shows the auth view and drops all state,
    /// signing in opens the write view.
    pub fn handle_session_events(&mut self) -> Option<AuthEvent> {
        let event = self.session_events.try_next()?;
        match (&event, self.view) {
            (AuthEvent::SignedOut, _) => {
                self.view = View::Auth;
                self.draft = JournalEntryDraft::default();
                self.filter = EntryFilter::default();
                self.entries.clear();
            }
            (AuthEvent::SignedIn(_), View::Auth) => self.view = View::Write,
            (AuthEvent::SignedIn(_), _) => {}
        }
        Some(event)
    }

    pub async fn sign_up(&mut self, credentials: &Credentials) -> Result<SignUp, AppError> {
        let sign_up = self.session.sign_up(credentials).await?;
        self.handle_session_events();
        Ok(sign_up)
    }

    pub async fn sign_in(&mut self, credentials: &Credentials) -> Result<Session, AppError> {
        let session = self.session.sign_in(credentials).await?;
        self.handle_session_events();
        Ok(session)
    }

    pub async fn restore(&mut self, session: Session) -> Result<Session, AppError> {
        let result = self.session.restore(session).await;
        self.handle_session_events();
        Ok(result?)
    }

    pub async fn sign_out(&mut self) -> Result<(), AppError> {
        let result = self.session.sign_out().await;
        self.handle_session_events();
        Ok(result?)
    }

    #[must_use]
    pub fn draft(&self) -> &JournalEntryDraft {
        &self.draft
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.draft.title = title;
    }

    /// Appends a line to the draft content.
    pub fn append_line(&mut self, line: &str) {
        if !self.draft.content.is_empty() {
            self.draft.content.push('\n');
        }
        self.draft.content.push_str(line);
    }

    pub fn discard_draft(&mut self) {
        self.draft = JournalEntryDraft::default();
    }

    pub fn show_write(&mut self) -> Result<(), AppError> {
        self.require_identity()?;
        self.view = View::Write;
        Ok(())
    }

    /// Switches to the timeline and reloads the entries. Coming from another view the filter starts empty.
    pub async fn show_timeline(&mut self) -> Result<(), AppError> {
        let identity = self.require_identity()?;
        if self.view != View::Timeline {
            self.filter = EntryFilter::default();
        }
        self.entries = self.timeline.list(&identity).await;
        self.view = View::Timeline;
        Ok(())
    }

    /// Saves the draft. On success the draft is cleared and the timeline is shown with the new entry,
    /// on failure the draft is kept.
    pub async fn save(&mut self) -> Result<JournalEntry, AppError> {
        let identity = self.require_identity()?;
        let created = self.capture.submit(&identity, &self.draft).await?;
        self.draft = JournalEntryDraft::default();
        self.filter = EntryFilter::default();
        self.show_timeline().await?;
        Ok(created)
    }

    #[must_use]
    pub fn filter(&self) -> &EntryFilter {
        &self.filter
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn set_mood(&mut self, mood: impl Into<String>) {
        self.filter.mood = mood.into();
    }

    #[must_use]
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    #[must_use]
    pub fn timeline_view(&self) -> TimelineView<'_> {
        timeline::view(&self.entries, &self.filter)
    }

    #[must_use]
    pub fn mood_options(&self) -> Vec<String> {
        timeline::mood_options(&self.entries)
    }
}
