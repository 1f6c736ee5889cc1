use super::error::ServiceError;
use crate::domain::{Alert, AlertDraft};
use crate::keys;
use crate::ports::KeyValueStore;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Personalized alerts, keyed `alert:<userId>:<alertId>` so one prefix scan
/// lists everything a user owns
pub struct AlertService {
    store: Arc<dyn KeyValueStore>,
}

impl AlertService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, user_id: &str, draft: AlertDraft) -> Result<Alert, ServiceError> {
        let alert = Alert {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            category: draft.category,
            title: draft.title,
            message: draft.message,
            priority: draft.priority,
            action_required: draft.action_required,
            created_at: Utc::now(),
        };

        let record = serde_json::to_value(&alert)?;
        self.store
            .set(&keys::alert(user_id, &alert.id), record)
            .await?;

        tracing::debug!("Created alert {} for user {}", alert.id, user_id);
        Ok(alert)
    }

    /// All alerts for a user, in key order
    pub async fn list(&self, user_id: &str) -> Result<Vec<Alert>, ServiceError> {
        let entries = self
            .store
            .get_by_prefix(&keys::alert_prefix(user_id))
            .await?;

        let mut alerts = Vec::with_capacity(entries.len());
        for (_, value) in entries {
            alerts.push(serde_json::from_value(value)?);
        }
        Ok(alerts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AlertCategory, Priority};
    use crate::persistence::SledKeyValueStore;

    fn service() -> (tempfile::TempDir, AlertService) {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = SledKeyValueStore::open(temp_dir.path().join("kv.sled")).unwrap();
        (temp_dir, AlertService::new(Arc::new(store)))
    }

    fn sample_draft(title: &str) -> AlertDraft {
        AlertDraft {
            category: AlertCategory::Health,
            title: title.to_string(),
            message: "Schedule a routine checkup this week".to_string(),
            priority: Priority::High,
            action_required: true,
        }
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let (_dir, service) = service();

        let created = service.create("user-42", sample_draft("Checkup")).await.unwrap();

        let alerts = service.list("user-42").await.unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id, created.id);
        assert_eq!(alerts[0].title, "Checkup");
        assert_eq!(alerts[0].category, AlertCategory::Health);
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_the_user() {
        let (_dir, service) = service();

        service.create("user-42", sample_draft("Mine")).await.unwrap();
        service.create("user-43", sample_draft("Theirs")).await.unwrap();

        let alerts = service.list("user-42").await.unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].title, "Mine");
    }

    #[tokio::test]
    async fn test_list_without_alerts_is_empty() {
        let (_dir, service) = service();

        assert!(service.list("user-42").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_follows_key_order() {
        let (_dir, service) = service();

        let mut ids: Vec<String> = Vec::new();
        for title in ["one", "two", "three"] {
            ids.push(service.create("user-42", sample_draft(title)).await.unwrap().id);
        }
        ids.sort();

        let listed: Vec<String> = service
            .list("user-42")
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(listed, ids);
    }
}
