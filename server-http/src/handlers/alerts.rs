use super::{bad_request, service_error, HandlerError};
use crate::models::{AlertsResponse, CreateAlertRequest, CreateAlertResponse};
use crate::state::AppState;
use crate::validation;
use astrolife::domain::AlertDraft;
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

/// POST /alerts/create
pub async fn create_alert(
    State(state): State<AppState>,
    Json(req): Json<CreateAlertRequest>,
) -> Result<Json<CreateAlertResponse>, HandlerError> {
    validation::validate_alert(&req).map_err(bad_request)?;

    info!("ALERT CREATE: user={}", req.user_id);

    let draft = AlertDraft {
        category: req.category,
        title: req.title,
        message: req.message,
        priority: req.priority,
        action_required: req.action_required,
    };

    match state.alerts.create(&req.user_id, draft).await {
        Ok(alert) => Ok(Json(CreateAlertResponse {
            success: true,
            alert_id: alert.id,
        })),
        Err(e) => Err(service_error("Failed to create alert", e)),
    }
}

/// GET /alerts/{user_id}
pub async fn list_alerts(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<AlertsResponse>, HandlerError> {
    info!("ALERTS LIST: user={}", user_id);

    match state.alerts.list(&user_id).await {
        Ok(alerts) => Ok(Json(AlertsResponse { alerts })),
        Err(e) => Err(service_error("Failed to fetch alerts", e)),
    }
}
