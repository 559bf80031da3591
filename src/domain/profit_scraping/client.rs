//! Profit-scraping sub-client — status, signals, risk analysis, start/stop.

use crate::client::DashboardClient;
use crate::domain::profit_scraping::wire::{
    ControlResponse, RiskAnalysisResponse, SignalsResponse, StatusResponse,
};
use crate::domain::profit_scraping::{
    RiskAnalysis, ScrapingSignal, ScrapingStatus, StartScrapingRequest,
};
use crate::error::SdkError;
use crate::http::{DashboardHttp, RetryPolicy};

pub struct ProfitScraping<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> ProfitScraping<'a> {
    pub async fn status(&self) -> Result<ScrapingStatus, SdkError> {
        let url = self.client.endpoint("/profit-scraping/status");
        let resp: StatusResponse = self.client.http.get(&url, RetryPolicy::None).await?;
        Ok(resp.into_data()?)
    }

    /// Latest signals, optionally for one symbol only.
    pub async fn signals(
        &self,
        symbol: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<ScrapingSignal>, SdkError> {
        let url = DashboardHttp::with_query(
            self.client.endpoint("/profit-scraping/signals"),
            &[
                ("symbol", symbol.map(str::to_string)),
                ("limit", limit.map(|l| l.to_string())),
            ],
        );
        let resp: SignalsResponse = self.client.http.get(&url, RetryPolicy::None).await?;
        Ok(resp.into_data()?)
    }

    pub async fn risk_analysis(&self) -> Result<RiskAnalysis, SdkError> {
        let url = self.client.endpoint("/profit-scraping/risk-analysis");
        let resp: RiskAnalysisResponse = self.client.http.get(&url, RetryPolicy::None).await?;
        Ok(resp.into_data()?)
    }

    /// Start the scraper. Validated locally first; never retried.
    pub async fn start(&self, request: &StartScrapingRequest) -> Result<(), SdkError> {
        request.validate()?;
        let url = self.client.endpoint("/profit-scraping/start");
        tracing::info!(symbols = ?request.symbols, "Starting profit scraping");
        let resp: ControlResponse = self.client.http.post(&url, request, RetryPolicy::None).await?;
        acknowledge(resp)
    }

    /// Stop the scraper. Never retried.
    pub async fn stop(&self) -> Result<(), SdkError> {
        let url = self.client.endpoint("/profit-scraping/stop");
        tracing::info!("Stopping profit scraping");
        let resp: ControlResponse = self
            .client
            .http
            .post(&url, &serde_json::json!({}), RetryPolicy::None)
            .await?;
        acknowledge(resp)
    }
}

/// Start/stop only need a successful status; an empty `data` is fine.
fn acknowledge(resp: ControlResponse) -> Result<(), SdkError> {
    if resp.is_success() {
        return Ok(());
    }
    resp.into_data().map(|_| ()).map_err(SdkError::from)
}
