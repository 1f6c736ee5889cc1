use super::error::ServiceError;
use crate::domain::UserAccount;
use crate::keys;
use crate::ports::KeyValueStore;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

/// Registration of new user accounts
pub struct AccountService {
    store: Arc<dyn KeyValueStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Register an account under an email or phone contact. The contact
    /// doubles as the uniqueness index; email wins when both are given.
    pub async fn register(
        &self,
        name: String,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<UserAccount, ServiceError> {
        let contact = match email.as_deref().or(phone.as_deref()) {
            Some(contact) if !contact.is_empty() => contact.to_string(),
            _ => return Err(ServiceError::ContactRequired),
        };

        let contact_key = keys::user_contact(&contact);
        if self.store.get(&contact_key).await?.is_some() {
            return Err(ServiceError::AccountExists);
        }

        let account = UserAccount {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            phone,
            created_at: Utc::now(),
        };

        let record = serde_json::to_value(&account)?;
        self.store
            .set_batch(vec![
                (keys::user(&account.id), record),
                (contact_key, json!({ "user_id": account.id })),
            ])
            .await?;

        tracing::info!("Registered account {} for contact {}", account.id, contact);
        Ok(account)
    }

    pub async fn fetch(&self, user_id: &str) -> Result<Option<UserAccount>, ServiceError> {
        match self.store.get(&keys::user(user_id)).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }
}
