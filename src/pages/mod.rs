//! Page pollers: one fetch cycle per page plus the `watch_*` entry points on
//! [`DashboardClient`](crate::client::DashboardClient).
//!
//! A cycle fans out to every endpoint the page reads and settles when all of
//! them have. Primary endpoints fail the cycle; secondary ones are logged and
//! left empty for that cycle.

pub mod dashboard;
pub mod positions;
pub mod profit_scraping;

use crate::client::DashboardClient;
use crate::error::SdkError;
use crate::poll::PollConfig;
use std::time::Duration;

pub use dashboard::fetch_dashboard;
pub use positions::fetch_positions;
pub use profit_scraping::fetch_profit_scraping;

/// Keep a secondary endpoint's result, logging and dropping a failure.
fn secondary<T>(page: &str, endpoint: &str, result: Result<T, SdkError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(
                page,
                endpoint,
                error = %e.user_message(),
                "Secondary endpoint failed; continuing without it"
            );
            None
        }
    }
}

impl DashboardClient {
    fn poll_config(&self, interval: Duration) -> PollConfig {
        PollConfig {
            interval,
            retry: self.config.poll_retry.clone(),
        }
    }
}
