//! Trading sub-client — live engine positions and status.

use crate::client::DashboardClient;
use crate::domain::trading::wire::{PositionsResponse, StatusResponse};
use crate::error::SdkError;
use crate::http::RetryPolicy;

pub struct Trading<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Trading<'a> {
    /// Open positions held by the trading engine.
    pub async fn positions(&self) -> Result<PositionsResponse, SdkError> {
        let url = self.client.endpoint("/trading/positions");
        Ok(self.client.http.get(&url, RetryPolicy::None).await?)
    }

    pub async fn status(&self) -> Result<StatusResponse, SdkError> {
        let url = self.client.endpoint("/trading/status");
        Ok(self.client.http.get(&url, RetryPolicy::None).await?)
    }
}
