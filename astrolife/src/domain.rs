use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registered user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Birth data captured during onboarding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub name: String,
    pub date_of_birth: String,
    pub time_of_birth: String,
    pub place_of_birth: String,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when saving a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInput {
    pub name: String,
    pub date_of_birth: String,
    pub time_of_birth: String,
    pub place_of_birth: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertCategory {
    Health,
    Travel,
    Finance,
    Property,
    Relationship,
    Child,
    Career,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub user_id: String,
    pub category: AlertCategory,
    pub title: String,
    pub message: String,
    pub priority: Priority,
    pub action_required: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating an alert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertDraft {
    pub category: AlertCategory,
    pub title: String,
    pub message: String,
    pub priority: Priority,
    pub action_required: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub message: String,
    pub priority: Priority,
    pub action_required: bool,
}

/// The health/finance/career reading returned by insight generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightReport {
    pub health: Insight,
    pub finance: Insight,
    pub career: Insight,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CelebrityMatch {
    pub name: String,
    pub profession: String,
    pub match_percentage: u8,
    pub zodiac_sign: String,
    pub birth_date: String,
    pub common_traits: Vec<String>,
}
