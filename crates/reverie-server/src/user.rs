use axum::extract::FromRequestParts;
use axum::{Extension, RequestPartsExt};
use axum_auth::AuthBearer;
use http::StatusCode;
use http::request::Parts;
use reverie_core::auth::Identity;
use reverie_core::auth::error::AuthError;
use reverie_core::services::Services;
use std::error::Error;

type Rejection = (StatusCode, &'static str);

/// The caller, resolved from the bearer token by the auth provider.
#[derive(Clone)]
pub(crate) struct ExtractIdentity(pub Identity);

impl<S> FromRequestParts<S> for ExtractIdentity
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Ok(AuthBearer(token)) = parts.extract::<AuthBearer>().await else {
            return Err((StatusCode::UNAUTHORIZED, "No authentication token provided"));
        };

        let Extension::<Services>(services) = parts.extract::<Extension<Services>>().await.map_err(|error| {
            tracing::error!(error = &error as &dyn Error, "services not found in app data");
            (StatusCode::INTERNAL_SERVER_ERROR, "Services not found")
        })?;

        match services.auth.get_user(&token).await {
            Ok(user) => Ok(Self(Identity::new(user, token))),
            Err(AuthError::Unauthorized | AuthError::InvalidCredentials) => {
                tracing::debug!("rejecting invalid token");
                Err((StatusCode::UNAUTHORIZED, "Authentication failed."))
            }
            Err(error) => {
                tracing::error!(error = &error as &dyn Error, "error validating token");
                Err((StatusCode::BAD_GATEWAY, "Error validating token"))
            }
        }
    }
}
