//! Dashboard overview: headline stats, open positions and the recent trades
//! list.

use super::{project, to_decimal, total_pnl, Row, RiskLevel, SortValue, ViewPreferences};
use crate::domain::stats::Stats;
use crate::domain::trading::{Position, Trade, TradingStatus};
use crate::shared::fmt::{decimal, num};
use crate::shared::Tone;
use rust_decimal::Decimal;

/// Trades shown on the overview card.
pub const RECENT_TRADES_SHOWN: usize = 10;

/// Latest successful fetch for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub stats: Stats,
    pub positions: Vec<Position>,
    /// `None` when the trades call failed this cycle.
    pub recent_trades: Option<Vec<Trade>>,
    pub status: Option<TradingStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradeSortKey {
    Symbol,
    Side,
    Price,
    Quantity,
    Pnl,
    Timestamp,
}

impl Row for Trade {
    type Key = TradeSortKey;

    fn sort_value(&self, key: TradeSortKey) -> SortValue<'_> {
        match key {
            TradeSortKey::Symbol => SortValue::Text(&self.symbol),
            TradeSortKey::Side => SortValue::Text(self.side.as_str()),
            TradeSortKey::Price => SortValue::Number(self.price),
            TradeSortKey::Quantity => SortValue::Number(self.quantity),
            TradeSortKey::Pnl => SortValue::Number(self.pnl.unwrap_or(0.0)),
            TradeSortKey::Timestamp => SortValue::Time(Some(self.timestamp)),
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.symbol.as_str(), self.side.as_str(), self.id.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// Unrealized PnL summed over open positions.
    pub total_pnl: Decimal,
    pub daily_pnl: f64,
    pub win_rate: f64,
    pub sharpe_ratio: f64,
    pub risk_level: RiskLevel,
    pub open_positions: usize,
    /// Filtered and sorted, at most [`RECENT_TRADES_SHOWN`].
    pub trades: Vec<Trade>,
    /// `false` when the trades feed was unavailable.
    pub trades_available: bool,
    pub engine_running: Option<bool>,
}

impl DashboardView {
    pub fn project(snapshot: &DashboardSnapshot, prefs: &ViewPreferences<TradeSortKey>) -> Self {
        let stats = &snapshot.stats;
        let mut trades = snapshot
            .recent_trades
            .as_deref()
            .map(|t| project(t, prefs))
            .unwrap_or_default();
        trades.truncate(RECENT_TRADES_SHOWN);

        Self {
            total_pnl: total_pnl(snapshot.positions.iter().map(|p| p.pnl)),
            daily_pnl: stats.daily_pnl,
            win_rate: stats.win_rate,
            sharpe_ratio: stats.sharpe_ratio,
            risk_level: RiskLevel::from_drawdown(stats.max_drawdown),
            open_positions: snapshot.positions.len(),
            trades,
            trades_available: snapshot.recent_trades.is_some(),
            engine_running: snapshot.status.as_ref().map(|s| s.running),
        }
    }

    pub fn pnl_tone(&self) -> Tone {
        Tone::of_decimal(&self.total_pnl)
    }

    pub fn daily_tone(&self) -> Tone {
        Tone::of_f64(self.daily_pnl)
    }

    pub fn total_pnl_label(&self) -> String {
        decimal::signed_currency(&self.total_pnl)
    }

    pub fn daily_pnl_label(&self) -> String {
        decimal::signed_currency(&to_decimal(self.daily_pnl))
    }

    pub fn win_rate_label(&self) -> String {
        num::ratio_as_percent(&self.win_rate, 1)
    }
}
