//! Profit-scraping page poller.

use futures_util::future::join3;

use crate::client::DashboardClient;
use crate::error::SdkError;
use crate::pages::secondary;
use crate::poll::{PollHandle, Poller};
use crate::view::profit_scraping::ProfitScrapingSnapshot;

/// Signals requested per cycle.
pub const SIGNALS_PER_CYCLE: u32 = 50;

/// One cycle: scraper status is required, signals and risk analysis are
/// best-effort.
pub async fn fetch_profit_scraping(
    client: &DashboardClient,
) -> Result<ProfitScrapingSnapshot, SdkError> {
    let scraping = client.profit_scraping();

    let (status, signals, risk) = join3(
        scraping.status(),
        scraping.signals(None, Some(SIGNALS_PER_CYCLE)),
        scraping.risk_analysis(),
    )
    .await;

    Ok(ProfitScrapingSnapshot {
        status: status?,
        signals: secondary("profit_scraping", "/profit-scraping/signals", signals),
        risk: secondary("profit_scraping", "/profit-scraping/risk-analysis", risk),
    })
}

impl DashboardClient {
    pub fn watch_profit_scraping(&self) -> PollHandle<ProfitScrapingSnapshot> {
        let client = self.clone();
        let config = self.poll_config(self.config.intervals.profit_scraping);
        Poller::new("profit_scraping", config, move || {
            let client = client.clone();
            async move { fetch_profit_scraping(&client).await }
        })
        .spawn()
    }
}
