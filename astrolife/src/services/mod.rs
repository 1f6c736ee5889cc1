mod accounts;
mod alerts;
mod error;
mod insights;
mod matches;
mod profiles;

pub use accounts::AccountService;
pub use alerts::AlertService;
pub use error::ServiceError;
pub use insights::InsightService;
pub use matches::MatchService;
pub use profiles::ProfileService;
