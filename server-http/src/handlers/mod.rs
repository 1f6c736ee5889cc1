mod alerts;
mod auth;
mod health;
mod insights;
mod profiles;

pub use alerts::{create_alert, list_alerts};
pub use auth::register;
pub use health::health_check;
pub use insights::{celebrity_match, generate_insights};
pub use profiles::{get_profile, save_profile};

use crate::models::ErrorResponse;
use astrolife::services::ServiceError;
use axum::{http::StatusCode, Json};

pub(crate) type HandlerError = (StatusCode, Json<ErrorResponse>);

/// Map a service failure to a response. Internal faults are logged and
/// reported with the endpoint's generic message only.
pub(crate) fn service_error(context: &'static str, err: ServiceError) -> HandlerError {
    match err {
        ServiceError::ProfileNotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Profile not found")),
        ),
        ServiceError::AccountExists | ServiceError::ContactRequired => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(err.to_string())),
        ),
        ServiceError::Storage(_) | ServiceError::Serialization(_) => {
            tracing::error!("{}: {}", context, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(context)),
            )
        }
    }
}

pub(crate) fn bad_request(err: crate::validation::ValidationError) -> HandlerError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(err.to_string())))
}
