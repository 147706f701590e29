use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::dashboard::events::{AccessEvent, Decision, RiskLevel};
use crate::dashboard::fixtures::{self, AnomalyAlert, LedgerEntry};

/// Running dashboard counters. Only ever incremented; after every fold
/// `total_access_attempts == allowed_access + denied_access` holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_access_attempts: u64,
    pub allowed_access: u64,
    pub denied_access: u64,
    pub high_risk_alerts: u64,
    pub active_anomalies: u64,
    pub blockchain_entries: u64,
    pub system_uptime: String,
    pub average_response_time: String,
}

impl DashboardStats {
    fn fold(&mut self, event: &AccessEvent) {
        self.total_access_attempts += 1;
        match event.decision {
            Decision::Allowed => self.allowed_access += 1,
            Decision::Denied => self.denied_access += 1,
        }
        if event.risk == RiskLevel::High {
            self.high_risk_alerts += 1;
        }
    }
}

/// All mutable dashboard state, owned in one place and passed explicitly.
/// One writer (the feed ticker) and any number of readers (the handlers).
#[derive(Debug)]
pub struct Dashboard {
    stats: DashboardStats,
    feed: VecDeque<AccessEvent>,
    capacity: usize,
    alerts: Vec<AnomalyAlert>,
    ledger: Vec<LedgerEntry>,
}

impl Dashboard {
    /// Builds the dashboard from the demo fixtures. The seeded feed is
    /// truncated to `capacity` so the recent-events bound holds from the
    /// first request on.
    pub fn seeded(capacity: usize, now: OffsetDateTime) -> Self {
        let mut feed: VecDeque<AccessEvent> = fixtures::seed_feed(now).into();
        feed.truncate(capacity);
        Self {
            stats: fixtures::baseline_stats(),
            feed,
            capacity,
            alerts: fixtures::seed_alerts(now),
            ledger: fixtures::seed_ledger(now),
        }
    }

    /// Folds one generated event in: prepends it to the recent feed,
    /// dropping the oldest entry past the cap, and bumps the counters.
    pub fn record(&mut self, event: AccessEvent) {
        self.stats.fold(&event);
        self.feed.push_front(event);
        self.feed.truncate(self.capacity);
    }

    pub fn stats(&self) -> DashboardStats {
        self.stats.clone()
    }

    /// Recent events, newest first.
    pub fn recent_events(&self) -> Vec<AccessEvent> {
        self.feed.iter().cloned().collect()
    }

    pub fn alerts(&self) -> &[AnomalyAlert] {
        &self.alerts
    }

    pub fn ledger(&self) -> &[LedgerEntry] {
        &self.ledger
    }
}
