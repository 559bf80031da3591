//! High-level client — `DashboardClient` with nested sub-client accessors.
//!
//! Each API area has its own sub-client in `domain/<name>/client.rs`; the page
//! pollers live in `pages/`. This module keeps the builder and the accessor
//! methods.

use crate::config::{DashboardConfig, PollIntervals};
use crate::domain::backtesting::client::Backtesting;
use crate::domain::profit_scraping::client::ProfitScraping;
use crate::domain::stats::client::StatsClient;
use crate::domain::trading::client::Trading;
use crate::error::SdkError;
use crate::http::{DashboardHttp, RetryConfig};
use crate::network::API_PREFIX;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::backtesting::client::Backtesting as BacktestingClient;
pub use crate::domain::profit_scraping::client::ProfitScraping as ProfitScrapingClient;
pub use crate::domain::trading::client::Trading as TradingClient;

/// The primary entry point.
///
/// Provides nested sub-client accessors for each API area:
/// `client.backtesting()`, `client.trading()`, etc. Cloning is cheap; the
/// underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    pub(crate) http: DashboardHttp,
    pub(crate) config: DashboardConfig,
}

impl DashboardClient {
    pub fn builder() -> DashboardClientBuilder {
        DashboardClientBuilder::default()
    }

    /// Client configured from `DASHBOARD_*` environment variables.
    pub fn from_env() -> Result<Self, SdkError> {
        DashboardClientBuilder::from_env()?.build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn backtesting(&self) -> Backtesting<'_> {
        Backtesting { client: self }
    }

    pub fn trading(&self) -> Trading<'_> {
        Trading { client: self }
    }

    pub fn stats(&self) -> StatsClient<'_> {
        StatsClient { client: self }
    }

    pub fn profit_scraping(&self) -> ProfitScraping<'_> {
        ProfitScraping { client: self }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Absolute URL for a versioned endpoint path such as `/stats`.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        self.http.url(&format!("{}{}", API_PREFIX, path))
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default)]
pub struct DashboardClientBuilder {
    config: DashboardConfig,
}

impl DashboardClientBuilder {
    /// Builder seeded from the environment (see [`DashboardConfig::from_env`]).
    pub fn from_env() -> Result<Self, SdkError> {
        Ok(Self {
            config: DashboardConfig::from_env()?,
        })
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.config.base_url = url.to_string();
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    pub fn intervals(mut self, intervals: PollIntervals) -> Self {
        self.config.intervals = intervals;
        self
    }

    /// Retry profile for the page pollers.
    pub fn poll_retry(mut self, retry: RetryConfig) -> Self {
        self.config.poll_retry = retry;
        self
    }

    pub fn config(mut self, config: DashboardConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<DashboardClient, SdkError> {
        self.config.validate()?;
        Ok(DashboardClient {
            http: DashboardHttp::new(&self.config.base_url, self.config.request_timeout)?,
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = DashboardClient::builder().build().unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.endpoint("/trading/positions"),
            "http://localhost:8000/api/v1/trading/positions"
        );
        assert_eq!(client.config().intervals, PollIntervals::default());
    }

    #[test]
    fn test_builder_overrides() {
        let client = DashboardClient::builder()
            .base_url("https://api.example.com/")
            .poll_retry(RetryConfig::fixed(5, Duration::from_secs(1)))
            .build()
            .unwrap();
        assert_eq!(
            client.endpoint("/stats"),
            "https://api.example.com/api/v1/stats"
        );
        assert_eq!(client.config().poll_retry.max_retries, 5);
    }

    #[test]
    fn test_builder_rejects_bad_url() {
        let err = DashboardClient::builder().base_url("ftp://nope").build().unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }
}
