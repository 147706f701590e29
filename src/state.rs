use std::sync::Arc;

use time::OffsetDateTime;
use tokio::sync::RwLock;

use crate::auth::UserDirectory;
use crate::config::AppConfig;
use crate::dashboard::Dashboard;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub directory: Arc<UserDirectory>,
    pub dashboard: Arc<RwLock<Dashboard>>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: Arc<AppConfig>) -> Self {
        let dashboard = Dashboard::seeded(config.feed.capacity, OffsetDateTime::now_utc());
        Self {
            config,
            directory: Arc::new(UserDirectory::seeded()),
            dashboard: Arc::new(RwLock::new(dashboard)),
        }
    }
}
