use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Coarse risk label attached to an event. Only flagged identities can ever
/// draw `High`; the unbiased draw covers low and medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Outcome label attached to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Allowed,
    Denied,
}

/// One simulated access attempt shown in the live feed. Never mutated after
/// creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessEvent {
    pub id: i64,
    pub user: String,
    pub location: String,
    pub risk: RiskLevel,
    pub decision: Decision,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub ip: String,
    pub device: String,
}

const USER_POOL: &[&str] = &[
    "alice.chen@ztai.com",
    "bob.martinez@ztai.com",
    "charlie.dev@ztai.com",
    "diana.admin@ztai.com",
    "eve.hacker@unknown.net",
    "frank.user@ztai.com",
];

const LOCATION_POOL: &[&str] = &[
    "San Francisco, US",
    "London, UK",
    "Tokyo, JP",
    "Sydney, AU",
    "Berlin, DE",
    "Singapore, SG",
    "Unknown Location",
    "Moscow, RU",
];

const DEVICE_POOL: &[&str] = &[
    "MacBook Pro",
    "iPhone 15",
    "Windows 11",
    "Android",
    "iPad",
    "Linux Terminal",
];

pub(crate) fn is_flagged(user: &str) -> bool {
    lazy_static! {
        static ref FLAGGED_RE: Regex = Regex::new(r"hacker|suspicious").unwrap();
    }
    FLAGGED_RE.is_match(user)
}

fn sample<'a>(rng: &mut impl Rng, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// Produces one synthetic access event.
///
/// A flagged identity forces risk = high and decision = denied; everything
/// else draws low or medium and is denied with 10% probability. The id is
/// the generation time in unix milliseconds, unique as long as ticks are at
/// least 1 ms apart.
pub fn next_event(rng: &mut impl Rng, now: OffsetDateTime) -> AccessEvent {
    let user = sample(rng, USER_POOL);

    let risk = if is_flagged(user) {
        RiskLevel::High
    } else if rng.gen_bool(0.5) {
        RiskLevel::Low
    } else {
        RiskLevel::Medium
    };

    let decision = match risk {
        RiskLevel::High => Decision::Denied,
        _ if rng.gen_bool(0.1) => Decision::Denied,
        _ => Decision::Allowed,
    };

    // Reserved ranges are not excluded; the address only has to look the part.
    let ip = format!(
        "{}.{}.{}.{}",
        rng.gen_range(0..=255u16),
        rng.gen_range(0..=255u16),
        rng.gen_range(0..=255u16),
        rng.gen_range(0..=255u16),
    );

    AccessEvent {
        id: (now.unix_timestamp_nanos() / 1_000_000) as i64,
        user: user.into(),
        location: sample(rng, LOCATION_POOL).into(),
        risk,
        decision,
        timestamp: now,
        ip,
        device: sample(rng, DEVICE_POOL).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn generate(rng: &mut StdRng) -> AccessEvent {
        next_event(rng, OffsetDateTime::now_utc())
    }

    #[test]
    fn flagged_identities_are_always_high_risk_and_denied() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut flagged_seen = 0;
        for _ in 0..1000 {
            let event = generate(&mut rng);
            if is_flagged(&event.user) {
                flagged_seen += 1;
                assert_eq!(event.risk, RiskLevel::High);
                assert_eq!(event.decision, Decision::Denied);
            }
        }
        assert!(flagged_seen > 0, "pool sampling never hit the flagged user");
    }

    #[test]
    fn unflagged_identities_never_draw_high_risk() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let event = generate(&mut rng);
            if !is_flagged(&event.user) {
                assert_ne!(event.risk, RiskLevel::High);
            }
        }
    }

    #[test]
    fn high_risk_implies_denied_in_every_trial() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..1000 {
            let event = generate(&mut rng);
            if event.risk == RiskLevel::High {
                assert_eq!(event.decision, Decision::Denied);
            }
        }
    }

    #[test]
    fn ip_is_four_octets_in_range() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..100 {
            let event = generate(&mut rng);
            let octets: Vec<&str> = event.ip.split('.').collect();
            assert_eq!(octets.len(), 4, "bad ip {}", event.ip);
            for octet in octets {
                octet.parse::<u8>().expect("octet out of range");
            }
        }
    }

    #[test]
    fn fields_come_from_the_fixed_pools() {
        let mut rng = StdRng::seed_from_u64(19);
        for _ in 0..200 {
            let event = generate(&mut rng);
            assert!(USER_POOL.contains(&event.user.as_str()));
            assert!(LOCATION_POOL.contains(&event.location.as_str()));
            assert!(DEVICE_POOL.contains(&event.device.as_str()));
        }
    }

    #[test]
    fn id_is_the_timestamp_in_millis() {
        let now = OffsetDateTime::now_utc();
        let mut rng = StdRng::seed_from_u64(23);
        let event = next_event(&mut rng, now);
        assert_eq!(event.id, (now.unix_timestamp_nanos() / 1_000_000) as i64);
        assert_eq!(event.timestamp, now);
    }

    #[test]
    fn risk_and_decision_serialize_lowercase() {
        let json = serde_json::to_string(&RiskLevel::High).unwrap();
        assert_eq!(json, "\"high\"");
        let json = serde_json::to_string(&Decision::Allowed).unwrap();
        assert_eq!(json, "\"allowed\"");
    }
}
