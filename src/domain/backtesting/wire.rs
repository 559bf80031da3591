//! Wire shapes for the backtesting endpoints.
//!
//! The catalogue endpoints wrap their list in a single named key; run and
//! compare use the `{status, data | detail}` envelope.

use super::{BacktestResult, StrategyComparison, StrategyInfo};
use crate::shared::Envelope;
use serde::{Deserialize, Serialize};

/// `GET /api/v1/backtesting/strategies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategiesResponse {
    pub strategies: Vec<StrategyInfo>,
}

/// `GET /api/v1/backtesting/symbols`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolsResponse {
    pub symbols: Vec<String>,
}

/// `POST /api/v1/backtesting/run`.
pub type RunResponse = Envelope<BacktestResult>;

/// `POST /api/v1/backtesting/compare`.
pub type CompareResponse = Envelope<Vec<StrategyComparison>>;
