use crate::handlers;
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::trace::TraceLayer;

/// Build and configure the application router
pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Registration
        .route("/auth/register", post(handlers::register))
        // Profile routes
        .route("/profile/save", post(handlers::save_profile))
        .route("/profile/{user_id}", get(handlers::get_profile))
        // Alert routes
        .route("/alerts/create", post(handlers::create_alert))
        .route("/alerts/{user_id}", get(handlers::list_alerts))
        // Canned content routes
        .route("/celebrity/match", post(handlers::celebrity_match))
        .route("/insights/generate", post(handlers::generate_insights))
        // Middleware
        .layer(NormalizePathLayer::trim_trailing_slash())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.iter().any(|origin| origin == "*") {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
