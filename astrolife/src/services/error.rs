use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Account already exists")]
    AccountExists,

    #[error("An email or phone contact is required")]
    ContactRequired,

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Storage error: {0}")]
    Storage(#[from] shared::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
