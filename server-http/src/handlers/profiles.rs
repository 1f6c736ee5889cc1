use super::{bad_request, service_error, HandlerError};
use crate::models::{ErrorResponse, ProfileResponse, SaveProfileRequest, SaveProfileResponse};
use crate::state::AppState;
use crate::validation;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

/// POST /profile/save
pub async fn save_profile(
    State(state): State<AppState>,
    Json(req): Json<SaveProfileRequest>,
) -> Result<Json<SaveProfileResponse>, HandlerError> {
    validation::validate_profile(&req).map_err(bad_request)?;

    let (user_id, input) = req.into_parts();
    info!("PROFILE SAVE: user={}", user_id);

    match state.profiles.save(&user_id, input).await {
        Ok(_) => Ok(Json(SaveProfileResponse { success: true })),
        Err(e) => Err(service_error("Failed to save profile", e)),
    }
}

/// GET /profile/{user_id}
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ProfileResponse>, HandlerError> {
    info!("PROFILE GET: user={}", user_id);

    match state.profiles.fetch(&user_id).await {
        Ok(Some(profile)) => Ok(Json(ProfileResponse { profile })),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Profile not found")),
        )),
        Err(e) => Err(service_error("Failed to fetch profile", e)),
    }
}
