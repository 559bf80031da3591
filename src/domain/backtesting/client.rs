//! Backtesting sub-client — strategy catalogue, runs and comparisons.

use crate::client::DashboardClient;
use crate::domain::backtesting::wire::{
    CompareResponse, RunResponse, StrategiesResponse, SymbolsResponse,
};
use crate::domain::backtesting::{
    BacktestRequest, BacktestResult, CompareRequest, StrategyComparison, StrategyInfo,
};
use crate::error::SdkError;
use crate::http::RetryPolicy;

pub struct Backtesting<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Backtesting<'a> {
    pub async fn strategies(&self) -> Result<Vec<StrategyInfo>, SdkError> {
        let url = self.client.endpoint("/backtesting/strategies");
        let resp: StrategiesResponse = self.client.http.get(&url, RetryPolicy::Idempotent).await?;
        Ok(resp.strategies)
    }

    pub async fn symbols(&self) -> Result<Vec<String>, SdkError> {
        let url = self.client.endpoint("/backtesting/symbols");
        let resp: SymbolsResponse = self.client.http.get(&url, RetryPolicy::Idempotent).await?;
        Ok(resp.symbols)
    }

    /// Run one backtest. Validated locally first; never retried.
    pub async fn run(&self, request: &BacktestRequest) -> Result<BacktestResult, SdkError> {
        request.validate()?;
        let url = self.client.endpoint("/backtesting/run");
        tracing::info!(
            strategy = %request.strategy,
            symbol = %request.symbol,
            "Running backtest"
        );
        let resp: RunResponse = self.client.http.post(&url, request, RetryPolicy::None).await?;
        Ok(resp.into_data()?)
    }

    /// Compare several strategies over the same window. Never retried.
    pub async fn compare(
        &self,
        request: &CompareRequest,
    ) -> Result<Vec<StrategyComparison>, SdkError> {
        request.validate()?;
        let url = self.client.endpoint("/backtesting/compare");
        tracing::info!(
            strategies = request.strategies.len(),
            symbol = %request.symbol,
            "Comparing strategies"
        );
        let resp: CompareResponse = self.client.http.post(&url, request, RetryPolicy::None).await?;
        Ok(resp.into_data()?)
    }
}
