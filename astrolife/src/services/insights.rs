use super::error::ServiceError;
use crate::domain::{Insight, InsightReport, Priority};
use crate::keys;
use crate::ports::KeyValueStore;
use std::sync::Arc;

/// Daily reading generation. Content is a fixed transit script; real
/// astrological computation is out of scope.
pub struct InsightService {
    store: Arc<dyn KeyValueStore>,
}

impl InsightService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// A reading requires saved birth data
    pub async fn generate(&self, user_id: &str) -> Result<InsightReport, ServiceError> {
        if self.store.get(&keys::profile(user_id)).await?.is_none() {
            return Err(ServiceError::ProfileNotFound);
        }

        Ok(InsightReport {
            health: Insight {
                message: "Saturn transit suggests focusing on routine health checkups".to_string(),
                priority: Priority::High,
                action_required: true,
            },
            finance: Insight {
                message: "Jupiter alignment favors long-term investments".to_string(),
                priority: Priority::Medium,
                action_required: false,
            },
            career: Insight {
                message: "Excellent period for career advancement until March".to_string(),
                priority: Priority::High,
                action_required: true,
            },
        })
    }
}
