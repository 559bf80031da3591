//! Backtesting page: the strategy comparison table and a single run summary.

use super::{project, Row, RiskLevel, SortValue, ViewPreferences};
use crate::domain::backtesting::{BacktestResult, StrategyComparison};
use crate::shared::fmt::num;
use crate::shared::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonSortKey {
    Strategy,
    TotalReturn,
    SharpeRatio,
    MaxDrawdown,
    WinRate,
    TotalTrades,
}

impl Row for StrategyComparison {
    type Key = ComparisonSortKey;

    fn sort_value(&self, key: ComparisonSortKey) -> SortValue<'_> {
        match key {
            ComparisonSortKey::Strategy => SortValue::Text(&self.strategy),
            ComparisonSortKey::TotalReturn => SortValue::Number(self.total_return),
            ComparisonSortKey::SharpeRatio => SortValue::Number(self.sharpe_ratio),
            ComparisonSortKey::MaxDrawdown => SortValue::Number(self.max_drawdown),
            ComparisonSortKey::WinRate => SortValue::Number(self.win_rate),
            ComparisonSortKey::TotalTrades => SortValue::Number(self.total_trades as f64),
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.strategy.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonView {
    pub rows: Vec<StrategyComparison>,
    /// Visible strategy with the highest Sharpe ratio.
    pub best_by_sharpe: Option<String>,
    pub best_by_return: Option<String>,
}

impl ComparisonView {
    pub fn project(
        results: &[StrategyComparison],
        prefs: &ViewPreferences<ComparisonSortKey>,
    ) -> Self {
        let rows = project(results, prefs);
        let best = |metric: fn(&StrategyComparison) -> f64| {
            rows.iter()
                .filter(|r| metric(r).is_finite())
                .max_by(|a, b| metric(a).total_cmp(&metric(b)))
                .map(|r| r.strategy.clone())
        };
        Self {
            best_by_sharpe: best(|r| r.sharpe_ratio),
            best_by_return: best(|r| r.total_return),
            rows,
        }
    }
}

/// Headline figures for one backtest run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub strategy: String,
    pub symbol: String,
    pub total_return: f64,
    pub return_tone: Tone,
    pub risk_level: RiskLevel,
    pub total_trades: u64,
    /// Lowest equity reached along the curve, when one was returned.
    pub trough_equity: Option<f64>,
}

impl RunSummary {
    pub fn from_result(result: &BacktestResult) -> Self {
        Self {
            strategy: result.strategy.clone(),
            symbol: result.symbol.clone(),
            total_return: result.total_return,
            return_tone: Tone::of_f64(result.total_return),
            risk_level: result.risk_level(),
            total_trades: result.total_trades,
            trough_equity: result
                .equity_curve
                .iter()
                .map(|p| p.equity)
                .filter(|e| e.is_finite())
                .min_by(f64::total_cmp),
        }
    }

    /// Total return as a signed percentage (`0.142` → `"+14.2%"`).
    pub fn total_return_label(&self) -> String {
        num::signed_percent(&(self.total_return * 100.0), 2)
    }
}
