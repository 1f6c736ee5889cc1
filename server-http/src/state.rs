use astrolife::persistence::SledKeyValueStore;
use astrolife::ports::KeyValueStore;
use astrolife::services::{
    AccountService, AlertService, InsightService, MatchService, ProfileService,
};
use shared::Result;
use std::path::Path;
use std::sync::Arc;

/// Server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SledKeyValueStore>,
    pub accounts: Arc<AccountService>,
    pub profiles: Arc<ProfileService>,
    pub alerts: Arc<AlertService>,
    pub insights: Arc<InsightService>,
    pub matches: Arc<MatchService>,
}

impl AppState {
    /// Open the store and wire up the services. The concrete store handle is
    /// kept alongside the port so shutdown can flush it.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let store = Arc::new(SledKeyValueStore::open(db_path)?);
        let kv: Arc<dyn KeyValueStore> = store.clone();

        Ok(Self {
            store,
            accounts: Arc::new(AccountService::new(kv.clone())),
            profiles: Arc::new(ProfileService::new(kv.clone())),
            alerts: Arc::new(AlertService::new(kv.clone())),
            insights: Arc::new(InsightService::new(kv)),
            matches: Arc::new(MatchService::new()),
        })
    }
}
