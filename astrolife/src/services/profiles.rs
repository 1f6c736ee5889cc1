use super::error::ServiceError;
use crate::domain::{ProfileInput, UserProfile};
use crate::keys;
use crate::ports::KeyValueStore;
use chrono::Utc;
use std::sync::Arc;

/// Birth-data profiles, one per user
pub struct ProfileService {
    store: Arc<dyn KeyValueStore>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Save (or replace) the profile for a user, stamping `updated_at`
    pub async fn save(
        &self,
        user_id: &str,
        input: ProfileInput,
    ) -> Result<UserProfile, ServiceError> {
        let profile = UserProfile {
            user_id: user_id.to_string(),
            name: input.name,
            date_of_birth: input.date_of_birth,
            time_of_birth: input.time_of_birth,
            place_of_birth: input.place_of_birth,
            updated_at: Utc::now(),
        };

        let record = serde_json::to_value(&profile)?;
        self.store.set(&keys::profile(user_id), record).await?;

        tracing::debug!("Saved profile for user {}", user_id);
        Ok(profile)
    }

    pub async fn fetch(&self, user_id: &str) -> Result<Option<UserProfile>, ServiceError> {
        match self.store.get(&keys::profile(user_id)).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }
}
