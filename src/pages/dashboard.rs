//! Dashboard overview poller.

use futures_util::future::join4;

use crate::client::DashboardClient;
use crate::error::SdkError;
use crate::pages::secondary;
use crate::poll::{PollHandle, Poller};
use crate::view::dashboard::{DashboardSnapshot, RECENT_TRADES_SHOWN};

/// One dashboard cycle: stats and positions are required, recent trades and
/// engine status are best-effort.
pub async fn fetch_dashboard(client: &DashboardClient) -> Result<DashboardSnapshot, SdkError> {
    let stats = client.stats();
    let trading = client.trading();

    let (summary, positions, trades, status) = join4(
        stats.summary(),
        stats.positions(),
        stats.recent_trades(Some(RECENT_TRADES_SHOWN as u32)),
        trading.status(),
    )
    .await;

    Ok(DashboardSnapshot {
        stats: summary?,
        positions: positions?,
        recent_trades: secondary("dashboard", "/trades", trades),
        status: secondary("dashboard", "/trading/status", status),
    })
}

impl DashboardClient {
    /// Poll the dashboard overview until the handle is stopped or dropped.
    ///
    /// Must be called inside a tokio runtime.
    pub fn watch_dashboard(&self) -> PollHandle<DashboardSnapshot> {
        let client = self.clone();
        let config = self.poll_config(self.config.intervals.dashboard);
        Poller::new("dashboard", config, move || {
            let client = client.clone();
            async move { fetch_dashboard(&client).await }
        })
        .spawn()
    }
}
