pub(crate) mod error;

use crate::routes::api::v0::journal::error::{JournalError, JournalErrorType};
use crate::routes::error::ErrorBody;
use crate::user::ExtractIdentity;
use axum::extract::Query;
use axum::response::IntoResponse;
use axum::routing::{Router, get};
use axum::{Extension, Json};
use http::StatusCode;
use reverie_core::services::Services;
use reverie_model::journal::JournalEntry;
use reverie_model::journal::partial::JournalEntryDraft;
use reverie_model::mood::Mood;
use reverie_model::timeline::{EntryFilter, Timeline};

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/entries", get(get_journal_entries).post(create_journal_entry))
        .route("/moods", get(get_moods))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/journal/entries",
    params(EntryFilter),
    responses(
        (status = OK, description = "Entries of the caller, newest first, filtered by search term and mood", body = Timeline),
        (status = UNAUTHORIZED, description = "Missing or invalid token"),
    ),
    tag = "v0/journal",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn get_journal_entries(
    ExtractIdentity(identity): ExtractIdentity,
    Extension(services): Extension<Services>,
    Query(filter): Query<EntryFilter>,
) -> Json<Timeline> {
    Json(services.timeline().timeline(&identity, &filter).await)
}

#[utoipa::path(
    post,
    path = "/api/v0/journal/entries",
    request_body(content = JournalEntryDraft, description = "Title and content of the new entry"),
    responses(
        (status = CREATED, description = "The analyzed and stored entry", body = JournalEntry),
        (status = BAD_REQUEST, description = "The content is empty", body = ErrorBody<JournalErrorType>),
        (status = BAD_GATEWAY, description = "The entry could not be stored", body = ErrorBody<JournalErrorType>),
    ),
    tag = "v0/journal",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn create_journal_entry(
    ExtractIdentity(identity): ExtractIdentity,
    Extension(services): Extension<Services>,
    Json(draft): Json<JournalEntryDraft>,
) -> Result<impl IntoResponse, JournalError> {
    let entry = services.capture().submit(&identity, &draft).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

#[utoipa::path(
    get,
    path = "/api/v0/journal/moods",
    responses(
        (status = OK, description = "The moods the analyzer chooses from", body = [Mood]),
    ),
    tag = "v0/journal"
)]
pub(crate) async fn get_moods() -> Json<Vec<Mood>> {
    Json(Mood::all())
}
