//! Positions page poller.

use futures_util::future::join;

use crate::client::DashboardClient;
use crate::error::SdkError;
use crate::pages::secondary;
use crate::poll::{PollHandle, Poller};
use crate::view::positions::PositionsSnapshot;

pub async fn fetch_positions(client: &DashboardClient) -> Result<PositionsSnapshot, SdkError> {
    let trading = client.trading();
    let (positions, status) = join(trading.positions(), trading.status()).await;

    Ok(PositionsSnapshot {
        positions: positions?,
        status: secondary("positions", "/trading/status", status),
    })
}

impl DashboardClient {
    /// Poll the engine's open positions until the handle is stopped or
    /// dropped.
    pub fn watch_positions(&self) -> PollHandle<PositionsSnapshot> {
        let client = self.clone();
        let config = self.poll_config(self.config.intervals.positions);
        Poller::new("positions", config, move || {
            let client = client.clone();
            async move { fetch_positions(&client).await }
        })
        .spawn()
    }
}
