use super::{service_error, HandlerError};
use crate::models::{InsightsRequest, InsightsResponse, MatchRequest, MatchResponse};
use crate::state::AppState;
use axum::{extract::State, Json};
use tracing::info;

/// POST /insights/generate
pub async fn generate_insights(
    State(state): State<AppState>,
    Json(req): Json<InsightsRequest>,
) -> Result<Json<InsightsResponse>, HandlerError> {
    info!("INSIGHTS: user={}", req.user_id);

    match state.insights.generate(&req.user_id).await {
        Ok(insights) => Ok(Json(InsightsResponse { insights })),
        Err(e) => Err(service_error("Failed to generate insights", e)),
    }
}

/// POST /celebrity/match
pub async fn celebrity_match(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Json<MatchResponse> {
    info!("CELEBRITY MATCH: name={}", req.user_profile.name);

    Json(MatchResponse {
        matches: state.matches.matches_for(&req.user_profile),
    })
}
