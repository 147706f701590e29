//! Decorative fixtures behind the "AI anomaly" and "blockchain" panels.
//! There is no detector and no ledger; these entries are served verbatim.

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::dashboard::events::{AccessEvent, Decision, RiskLevel};
use crate::dashboard::stats::DashboardStats;

/// Static anomaly-alert entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyAlert {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub user: String,
    pub severity: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub status: String,
}

/// Static blockchain-style log entry. The hash and block number are
/// hardcoded strings, not the output of any chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub id: u32,
    pub action: String,
    pub user: String,
    pub hash: String,
    pub block_number: u64,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub gas_used: String,
}

/// Counter baseline the dashboard starts from.
pub fn baseline_stats() -> DashboardStats {
    DashboardStats {
        total_access_attempts: 15847,
        allowed_access: 13892,
        denied_access: 1955,
        high_risk_alerts: 7,
        active_anomalies: 3,
        blockchain_entries: 245893,
        system_uptime: "99.97%".into(),
        average_response_time: "0.23s".into(),
    }
}

struct FeedSeed {
    user: &'static str,
    location: &'static str,
    risk: RiskLevel,
    decision: Decision,
    age_secs: i64,
    ip: &'static str,
    device: &'static str,
}

const FEED_SEEDS: &[FeedSeed] = &[
    FeedSeed { user: "alice.chen@ztai.com", location: "San Francisco, US", risk: RiskLevel::Low, decision: Decision::Allowed, age_secs: 2, ip: "192.168.1.45", device: "MacBook Pro" },
    FeedSeed { user: "bob.martinez@ztai.com", location: "Mexico City, MX", risk: RiskLevel::Medium, decision: Decision::Allowed, age_secs: 15, ip: "10.0.0.23", device: "iPhone 15" },
    FeedSeed { user: "eve.hacker@unknown.net", location: "Unknown Location", risk: RiskLevel::High, decision: Decision::Denied, age_secs: 30, ip: "203.0.113.42", device: "Linux Terminal" },
    FeedSeed { user: "charlie.dev@ztai.com", location: "London, UK", risk: RiskLevel::Low, decision: Decision::Allowed, age_secs: 45, ip: "172.16.0.10", device: "Windows 11" },
    FeedSeed { user: "suspicious.user@temp.mail", location: "Moscow, RU", risk: RiskLevel::High, decision: Decision::Denied, age_secs: 60, ip: "198.51.100.8", device: "Android" },
    FeedSeed { user: "diana.admin@ztai.com", location: "Tokyo, JP", risk: RiskLevel::Medium, decision: Decision::Allowed, age_secs: 90, ip: "203.0.113.15", device: "iPad" },
    FeedSeed { user: "frank.wilson@ztai.com", location: "Sydney, AU", risk: RiskLevel::Low, decision: Decision::Allowed, age_secs: 120, ip: "10.20.30.40", device: "MacBook Air" },
    FeedSeed { user: "malware.bot@darkweb.onion", location: "Unknown Location", risk: RiskLevel::High, decision: Decision::Denied, age_secs: 150, ip: "192.0.2.123", device: "Bot Network" },
    FeedSeed { user: "grace.kim@ztai.com", location: "Seoul, KR", risk: RiskLevel::Low, decision: Decision::Allowed, age_secs: 180, ip: "172.31.0.100", device: "Galaxy S24" },
    FeedSeed { user: "henry.jones@ztai.com", location: "Berlin, DE", risk: RiskLevel::Medium, decision: Decision::Allowed, age_secs: 210, ip: "10.0.1.50", device: "ThinkPad X1" },
    FeedSeed { user: "threat.actor@anon.net", location: "Proxy Server", risk: RiskLevel::High, decision: Decision::Denied, age_secs: 240, ip: "198.51.100.255", device: "Kali Linux" },
    FeedSeed { user: "isabel.garcia@ztai.com", location: "Madrid, ES", risk: RiskLevel::Low, decision: Decision::Allowed, age_secs: 270, ip: "192.168.0.75", device: "Surface Pro" },
    FeedSeed { user: "jack.developer@ztai.com", location: "Toronto, CA", risk: RiskLevel::Medium, decision: Decision::Allowed, age_secs: 300, ip: "10.10.10.25", device: "iMac" },
    FeedSeed { user: "phishing.attempt@fake.com", location: "VPN Exit Node", risk: RiskLevel::High, decision: Decision::Denied, age_secs: 330, ip: "203.0.113.99", device: "Mobile Device" },
    FeedSeed { user: "kate.analyst@ztai.com", location: "Mumbai, IN", risk: RiskLevel::Low, decision: Decision::Allowed, age_secs: 360, ip: "172.16.5.10", device: "Dell XPS" },
];

/// Initial access feed, newest first, timestamped relative to `now`.
pub fn seed_feed(now: OffsetDateTime) -> Vec<AccessEvent> {
    FEED_SEEDS
        .iter()
        .enumerate()
        .map(|(i, seed)| AccessEvent {
            id: (i + 1) as i64,
            user: seed.user.into(),
            location: seed.location.into(),
            risk: seed.risk,
            decision: seed.decision,
            timestamp: now - Duration::seconds(seed.age_secs),
            ip: seed.ip.into(),
            device: seed.device.into(),
        })
        .collect()
}

pub fn seed_alerts(now: OffsetDateTime) -> Vec<AnomalyAlert> {
    vec![
        AnomalyAlert {
            id: 1,
            kind: "Unusual Login Pattern".into(),
            user: "eve.hacker@unknown.net".into(),
            severity: "high".into(),
            description: "Multiple failed login attempts from different geographic locations".into(),
            timestamp: now - Duration::seconds(5),
            status: "active".into(),
        },
        AnomalyAlert {
            id: 2,
            kind: "Data Exfiltration Attempt".into(),
            user: "suspicious.user@temp.mail".into(),
            severity: "critical".into(),
            description: "Attempting to download large datasets outside business hours".into(),
            timestamp: now - Duration::seconds(180),
            status: "active".into(),
        },
        AnomalyAlert {
            id: 3,
            kind: "Anomalous API Usage".into(),
            user: "bob.martinez@ztai.com".into(),
            severity: "medium".into(),
            description: "API calls 300% above normal baseline".into(),
            timestamp: now - Duration::seconds(300),
            status: "investigating".into(),
        },
    ]
}

pub fn seed_ledger(now: OffsetDateTime) -> Vec<LedgerEntry> {
    vec![
        LedgerEntry {
            id: 1,
            action: "Access Granted".into(),
            user: "alice.chen@ztai.com".into(),
            hash: "0x8f9b2c7d1e6a5b4c9f8e7d6c5b4a3f2e1d0c9b8a7f6e5d4c3b2a1f0e9d8c7b6a5".into(),
            block_number: 245891,
            timestamp: now - Duration::seconds(2),
            gas_used: "21000".into(),
        },
        LedgerEntry {
            id: 2,
            action: "Access Denied".into(),
            user: "eve.hacker@unknown.net".into(),
            hash: "0x1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3".into(),
            block_number: 245892,
            timestamp: now - Duration::seconds(30),
            gas_used: "18500".into(),
        },
        LedgerEntry {
            id: 3,
            action: "Anomaly Detected".into(),
            user: "suspicious.user@temp.mail".into(),
            hash: "0x9e8d7c6b5a4f3e2d1c0b9a8f7e6d5c4b3a2f1e0d9c8b7a6f5e4d3c2b1a0f9e8d7".into(),
            block_number: 245893,
            timestamp: now - Duration::seconds(60),
            gas_used: "25000".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_counters_are_consistent() {
        let stats = baseline_stats();
        assert_eq!(
            stats.total_access_attempts,
            stats.allowed_access + stats.denied_access
        );
    }

    #[test]
    fn seed_feed_is_newest_first() {
        let now = OffsetDateTime::now_utc();
        let feed = seed_feed(now);
        assert_eq!(feed.len(), 15);
        for pair in feed.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn seeded_high_risk_entries_are_all_denied() {
        let feed = seed_feed(OffsetDateTime::now_utc());
        for event in feed.iter().filter(|e| e.risk == RiskLevel::High) {
            assert_eq!(event.decision, Decision::Denied);
        }
    }

    #[test]
    fn alert_type_field_serializes_as_type() {
        let alerts = seed_alerts(OffsetDateTime::now_utc());
        let json = serde_json::to_string(&alerts[0]).unwrap();
        assert!(json.contains("\"type\":\"Unusual Login Pattern\""));
    }

    #[test]
    fn ledger_uses_camel_case_fields() {
        let ledger = seed_ledger(OffsetDateTime::now_utc());
        let json = serde_json::to_string(&ledger[2]).unwrap();
        assert!(json.contains("\"blockNumber\":245893"));
        assert!(json.contains("\"gasUsed\":\"25000\""));
    }
}
