//! Backtesting domain — strategy catalogue, single runs and comparisons.
//!
//! Runs and comparisons are user-triggered: they are never polled or retried,
//! and their failures are shown immediately.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::domain::trading::Trade;
use crate::error::SdkError;
use crate::view::RiskLevel;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A strategy the backend can backtest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyInfo {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Default parameters, free-form per strategy.
    #[serde(default)]
    pub parameters: Value,
}

/// Body of `POST /backtesting/run`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BacktestRequest {
    pub strategy: String,
    pub symbol: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub initial_capital: f64,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub parameters: Value,
}

impl BacktestRequest {
    pub fn new(
        strategy: impl Into<String>,
        symbol: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        initial_capital: f64,
    ) -> Self {
        Self {
            strategy: strategy.into(),
            symbol: symbol.into(),
            start_date,
            end_date,
            initial_capital,
            parameters: Value::Null,
        }
    }

    pub fn with_parameters(mut self, parameters: Value) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn validate(&self) -> Result<(), SdkError> {
        if self.strategy.trim().is_empty() {
            return Err(SdkError::Validation("strategy is required".into()));
        }
        validate_window(&self.symbol, self.start_date, self.end_date, self.initial_capital)
    }
}

/// Body of `POST /backtesting/compare`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareRequest {
    pub strategies: Vec<String>,
    pub symbol: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub initial_capital: f64,
}

impl CompareRequest {
    pub fn validate(&self) -> Result<(), SdkError> {
        let named = self.strategies.iter().filter(|s| !s.trim().is_empty()).count();
        if named < 2 {
            return Err(SdkError::Validation(
                "select at least two strategies to compare".into(),
            ));
        }
        validate_window(&self.symbol, self.start_date, self.end_date, self.initial_capital)
    }
}

fn validate_window(
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
    initial_capital: f64,
) -> Result<(), SdkError> {
    if symbol.trim().is_empty() {
        return Err(SdkError::Validation("symbol is required".into()));
    }
    if start >= end {
        return Err(SdkError::Validation(format!(
            "start date {} must be before end date {}",
            start, end
        )));
    }
    if !(initial_capital.is_finite() && initial_capital > 0.0) {
        return Err(SdkError::Validation(
            "initial capital must be a positive amount".into(),
        ));
    }
    Ok(())
}

/// One point of a backtest equity curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    #[serde(deserialize_with = "crate::shared::serde_util::utc_datetime::deserialize")]
    pub timestamp: DateTime<Utc>,
    pub equity: f64,
}

/// Result of a single backtest run. Ratios are fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestResult {
    pub strategy: String,
    pub symbol: String,
    pub total_return: f64,
    #[serde(default)]
    pub annualized_return: f64,
    #[serde(default)]
    pub sharpe_ratio: f64,
    #[serde(default)]
    pub max_drawdown: f64,
    #[serde(default)]
    pub win_rate: f64,
    #[serde(default)]
    pub total_trades: u64,
    #[serde(default)]
    pub final_capital: f64,
    #[serde(default)]
    pub equity_curve: Vec<EquityPoint>,
    #[serde(default)]
    pub trades: Vec<Trade>,
}

impl BacktestResult {
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_drawdown(self.max_drawdown)
    }
}

/// One row of a strategy comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub strategy: String,
    pub total_return: f64,
    #[serde(default)]
    pub sharpe_ratio: f64,
    #[serde(default)]
    pub max_drawdown: f64,
    #[serde(default)]
    pub win_rate: f64,
    #[serde(default)]
    pub total_trades: u64,
}
