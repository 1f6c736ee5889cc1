use crate::models::HealthResponse;
use axum::Json;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "AstroLife server is running".to_string(),
    })
}
