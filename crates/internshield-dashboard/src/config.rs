use std::time::Duration;

use internshield_client::{DEFAULT_ENDPOINT, HttpScoringConfig, ScoringClientConfig};

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_FRAME_MS: u64 = 16;
const TIMEOUT_MS_MIN: u64 = 100;
const TIMEOUT_MS_MAX: u64 = 120_000;
const FRAME_MS_MIN: u64 = 1;
const FRAME_MS_MAX: u64 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub frame_interval: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            frame_interval: Duration::from_millis(DEFAULT_FRAME_MS),
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let endpoint = lookup("INTERNSHIELD_ENDPOINT")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let timeout_ms = lookup_u64(&lookup, "INTERNSHIELD_TIMEOUT_MS", DEFAULT_TIMEOUT_MS);
        let frame_ms = lookup_u64(&lookup, "INTERNSHIELD_FRAME_MS", DEFAULT_FRAME_MS);
        let mut cfg = Self {
            endpoint,
            ..Self::default()
        };
        cfg.set_timeout_ms(timeout_ms);
        cfg.set_frame_ms(frame_ms);
        cfg
    }

    pub fn set_timeout_ms(&mut self, ms: u64) {
        self.timeout = Duration::from_millis(ms.clamp(TIMEOUT_MS_MIN, TIMEOUT_MS_MAX));
    }

    pub fn set_frame_ms(&mut self, ms: u64) {
        self.frame_interval = Duration::from_millis(ms.clamp(FRAME_MS_MIN, FRAME_MS_MAX));
    }

    pub fn scoring_client_config(&self) -> ScoringClientConfig {
        let mut cfg = HttpScoringConfig::new(self.endpoint.clone());
        cfg.timeout = self.timeout;
        ScoringClientConfig::Http(cfg)
    }
}

fn lookup_u64(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: u64) -> u64 {
    lookup(name)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = DashboardConfig::from_lookup(|_| None);
        assert_eq!(cfg, DashboardConfig::default());
        assert_eq!(cfg.endpoint, "http://127.0.0.1:5000/api/verify");
    }

    #[test]
    fn env_values_are_trimmed_and_clamped() {
        let env = vars(&[
            ("INTERNSHIELD_ENDPOINT", "  http://scoring.internal/api/verify "),
            ("INTERNSHIELD_TIMEOUT_MS", "999999"),
            ("INTERNSHIELD_FRAME_MS", "0"),
        ]);
        let cfg = DashboardConfig::from_lookup(|name| env.get(name).cloned());
        assert_eq!(cfg.endpoint, "http://scoring.internal/api/verify");
        assert_eq!(cfg.timeout, Duration::from_millis(120_000));
        assert_eq!(cfg.frame_interval, Duration::from_millis(1));
    }

    #[test]
    fn garbage_numbers_fall_back_to_defaults() {
        let env = vars(&[
            ("INTERNSHIELD_TIMEOUT_MS", "soon"),
            ("INTERNSHIELD_ENDPOINT", "   "),
        ]);
        let cfg = DashboardConfig::from_lookup(|name| env.get(name).cloned());
        assert_eq!(cfg.timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn explicit_overrides_use_env_bounds() {
        let mut cfg = DashboardConfig::default();
        cfg.set_timeout_ms(5);
        cfg.set_frame_ms(60_000);
        assert_eq!(cfg.timeout, Duration::from_millis(100));
        assert_eq!(cfg.frame_interval, Duration::from_millis(1_000));

        cfg.set_timeout_ms(2_500);
        cfg.set_frame_ms(33);
        assert_eq!(cfg.timeout, Duration::from_millis(2_500));
        assert_eq!(cfg.frame_interval, Duration::from_millis(33));
    }

    #[test]
    fn client_config_carries_timeout() {
        let cfg = DashboardConfig {
            timeout: Duration::from_millis(2500),
            ..DashboardConfig::default()
        };
        let ScoringClientConfig::Http(http) = cfg.scoring_client_config();
        assert_eq!(http.timeout, Duration::from_millis(2500));
        assert_eq!(http.endpoint, DEFAULT_ENDPOINT);
    }
}
