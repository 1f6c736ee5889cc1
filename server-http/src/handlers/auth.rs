use super::{bad_request, service_error, HandlerError};
use crate::models::{RegisterRequest, RegisterResponse};
use crate::state::AppState;
use crate::validation;
use axum::{extract::State, Json};
use tracing::info;

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, HandlerError> {
    validation::validate_register(&req).map_err(bad_request)?;

    info!("REGISTER: name={}", req.name);

    match state.accounts.register(req.name, req.email, req.phone).await {
        Ok(user) => Ok(Json(RegisterResponse {
            success: true,
            user,
        })),
        Err(e) => Err(service_error("Registration failed", e)),
    }
}
