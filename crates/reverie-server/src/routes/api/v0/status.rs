use axum::routing::get;
use axum::{Extension, Json, Router};
use reverie_core::services::Services;
use reverie_model::status::Status;
use tracing::instrument;

pub fn create_router<S>() -> Router<S> {
    Router::new().route("/", get(get_status)).with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/status",
    responses(
        (status = OK, description = "Server is up", body = Status),
    ),
    tag = "util"
)]
#[instrument(skip_all)]
pub(crate) async fn get_status(Extension(services): Extension<Services>) -> Json<Status> {
    Json(services.status())
}
