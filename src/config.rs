use std::time::Duration;

use serde::Deserialize;

/// Settings for the simulated live feed.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    pub tick_seconds: u64,
    pub capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub feed: FeedConfig,
    pub social_login_delay_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = std::env::var("APP_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8080);
        let feed = FeedConfig {
            tick_seconds: std::env::var("FEED_TICK_SECONDS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(8),
            capacity: std::env::var("FEED_CAPACITY")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(10),
        };
        let social_login_delay_ms = std::env::var("SOCIAL_LOGIN_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(1500);
        Ok(Self {
            host,
            port,
            feed,
            social_login_delay_ms,
        })
    }
}

impl FeedConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_secs(self.tick_seconds)
    }
}
