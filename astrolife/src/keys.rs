//! Colon-delimited key layout used by the services.
//!
//! The store itself enforces no hierarchy; callers encode it into the key
//! string. Alerts nest under their owner so a single prefix scan lists them.

pub fn user(user_id: &str) -> String {
    format!("user:{}", user_id)
}

/// Uniqueness index from a contact (email or phone) to its account id.
pub fn user_contact(contact: &str) -> String {
    format!("user_contact:{}", contact)
}

pub fn profile(user_id: &str) -> String {
    format!("profile:{}", user_id)
}

pub fn alert(user_id: &str, alert_id: &str) -> String {
    format!("alert:{}:{}", user_id, alert_id)
}

pub fn alert_prefix(user_id: &str) -> String {
    format!("alert:{}:", user_id)
}
