//! Account-wide statistics and the generic position/trade feeds the dashboard
//! overview reads.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

/// Aggregate account statistics (`GET /stats`).
///
/// Ratios (`win_rate`, `max_drawdown`) are fractions: `0.15` is 15%.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub total_pnl: f64,
    pub daily_pnl: f64,
    pub win_rate: f64,
    pub total_trades: u64,
    pub active_positions: u32,
    #[serde(alias = "drawdown")]
    pub max_drawdown: f64,
    pub sharpe_ratio: f64,
}
