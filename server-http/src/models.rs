use astrolife::domain::{
    Alert, AlertCategory, CelebrityMatch, InsightReport, Priority, ProfileInput, UserAccount,
    UserProfile,
};
use serde::{Deserialize, Serialize};

// === Registration Models ===

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub user: UserAccount,
}

// === Profile Models ===

#[derive(Deserialize)]
pub struct SaveProfileRequest {
    pub user_id: String,
    pub name: String,
    pub date_of_birth: String,
    pub time_of_birth: String,
    pub place_of_birth: String,
}

impl SaveProfileRequest {
    pub fn into_parts(self) -> (String, ProfileInput) {
        (
            self.user_id,
            ProfileInput {
                name: self.name,
                date_of_birth: self.date_of_birth,
                time_of_birth: self.time_of_birth,
                place_of_birth: self.place_of_birth,
            },
        )
    }
}

#[derive(Serialize)]
pub struct SaveProfileResponse {
    pub success: bool,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub profile: UserProfile,
}

// === Alert Models ===

#[derive(Deserialize)]
pub struct CreateAlertRequest {
    pub user_id: String,
    pub category: AlertCategory,
    pub title: String,
    pub message: String,
    pub priority: Priority,
    #[serde(default)]
    pub action_required: bool,
}

#[derive(Serialize)]
pub struct CreateAlertResponse {
    pub success: bool,
    pub alert_id: String,
}

#[derive(Serialize)]
pub struct AlertsResponse {
    pub alerts: Vec<Alert>,
}

// === Match and Insight Models ===

#[derive(Deserialize)]
pub struct MatchRequest {
    pub user_profile: ProfileInput,
}

#[derive(Serialize)]
pub struct MatchResponse {
    pub matches: Vec<CelebrityMatch>,
}

#[derive(Deserialize)]
pub struct InsightsRequest {
    pub user_id: String,
}

#[derive(Serialize)]
pub struct InsightsResponse {
    pub insights: InsightReport,
}

// === Shared Models ===

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
