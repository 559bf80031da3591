//! Client configuration: API base URL, request timeout and page poll
//! intervals, optionally read from the environment (`.env` supported).

use crate::error::SdkError;
use crate::http::RetryConfig;
use crate::network::DEFAULT_API_URL;
use std::time::Duration;

pub const ENV_API_URL: &str = "DASHBOARD_API_URL";
pub const ENV_REQUEST_TIMEOUT_MS: &str = "DASHBOARD_REQUEST_TIMEOUT_MS";
pub const ENV_POLL_DASHBOARD_MS: &str = "DASHBOARD_POLL_DASHBOARD_MS";
pub const ENV_POLL_POSITIONS_MS: &str = "DASHBOARD_POLL_POSITIONS_MS";
pub const ENV_POLL_PROFIT_SCRAPING_MS: &str = "DASHBOARD_POLL_PROFIT_SCRAPING_MS";

/// Poll interval per page. Staggered so the pages don't hit the API in
/// lockstep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollIntervals {
    pub dashboard: Duration,
    pub positions: Duration,
    pub profit_scraping: Duration,
}

impl Default for PollIntervals {
    fn default() -> Self {
        Self {
            dashboard: Duration::from_secs(30),
            positions: Duration::from_secs(10),
            profit_scraping: Duration::from_secs(15),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    pub intervals: PollIntervals,
    /// Retry profile for background polling.
    pub poll_retry: RetryConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            intervals: PollIntervals::default(),
            poll_retry: RetryConfig::polling(),
        }
    }
}

impl DashboardConfig {
    /// Load `.env` (if present) and read overrides from the process
    /// environment. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, SdkError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SdkError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }
        if let Some(d) = read_millis(&lookup, ENV_REQUEST_TIMEOUT_MS)? {
            config.request_timeout = d;
        }
        if let Some(d) = read_millis(&lookup, ENV_POLL_DASHBOARD_MS)? {
            config.intervals.dashboard = d;
        }
        if let Some(d) = read_millis(&lookup, ENV_POLL_POSITIONS_MS)? {
            config.intervals.positions = d;
        }
        if let Some(d) = read_millis(&lookup, ENV_POLL_PROFIT_SCRAPING_MS)? {
            config.intervals.profit_scraping = d;
        }

        config.validate()?;
        tracing::debug!(base_url = %config.base_url, "Loaded dashboard config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SdkError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(SdkError::Config(format!(
                "base URL must start with http:// or https://, got `{}`",
                self.base_url
            )));
        }
        if self.request_timeout.is_zero() {
            return Err(SdkError::Config("request timeout must be non-zero".into()));
        }
        let intervals = [
            ("dashboard", self.intervals.dashboard),
            ("positions", self.intervals.positions),
            ("profit scraping", self.intervals.profit_scraping),
        ];
        for (page, interval) in intervals {
            if interval.is_zero() {
                return Err(SdkError::Config(format!(
                    "{} poll interval must be non-zero",
                    page
                )));
            }
        }
        Ok(())
    }
}

fn read_millis<F>(lookup: &F, key: &str) -> Result<Option<Duration>, SdkError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<u64>()
        .map(|ms| Some(Duration::from_millis(ms)))
        .map_err(|e| SdkError::Config(format!("{}: invalid milliseconds `{}`: {}", key, raw, e)))
}
