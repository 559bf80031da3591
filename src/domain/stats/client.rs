//! Stats sub-client — account summary plus generic position and trade feeds.

use crate::client::DashboardClient;
use crate::domain::stats::wire::{PositionsResponse, StatsResponse, TradesResponse};
use crate::error::SdkError;
use crate::http::{DashboardHttp, RetryPolicy};

pub struct StatsClient<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> StatsClient<'a> {
    pub async fn summary(&self) -> Result<StatsResponse, SdkError> {
        let url = self.client.endpoint("/stats");
        Ok(self.client.http.get(&url, RetryPolicy::None).await?)
    }

    pub async fn positions(&self) -> Result<PositionsResponse, SdkError> {
        let url = self.client.endpoint("/positions");
        Ok(self.client.http.get(&url, RetryPolicy::None).await?)
    }

    /// Most recent trades; the server picks the page size when `limit` is `None`.
    pub async fn recent_trades(&self, limit: Option<u32>) -> Result<TradesResponse, SdkError> {
        let url = DashboardHttp::with_query(
            self.client.endpoint("/trades"),
            &[("limit", limit.map(|l| l.to_string()))],
        );
        Ok(self.client.http.get(&url, RetryPolicy::None).await?)
    }
}
