use crate::routes;
use axum::{Extension, Router};
use http::{HeaderValue, Method, header};
use reverie_core::services::Services;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[cfg(test)]
mod tests;

pub(crate) fn create_app(services: Services, origins: &[String]) -> anyhow::Result<Router> {
    let origins = origins
        .iter()
        .map(|origin| origin.parse())
        .collect::<Result<Vec<HeaderValue>, _>>()?;
    if origins.is_empty() {
        tracing::warn!("no CORS origins configured, browsers on other origins will be refused");
    } else {
        tracing::info!(?origins, "allowing origins");
    }

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::AUTHORIZATION, header::ORIGIN])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .max_age(Duration::from_secs(3600));

    let app = Router::new()
        .merge(routes::swagger::create_router())
        .nest("/auth", routes::auth::create_router())
        .nest(
            "/api/v0",
            Router::new()
                .nest("/status", routes::api::v0::status::create_router())
                .nest("/journal", routes::api::v0::journal::create_router()),
        )
        .layer(
            // ServiceBuilder layers are called top to bottom
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(Extension(services)),
        )
        .with_state(());
    Ok(app)
}
