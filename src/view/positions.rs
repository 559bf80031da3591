//! Positions page: the open-positions table and its totals.

use super::{project, total_pnl, Row, SortValue, ViewPreferences};
use crate::domain::trading::{Position, TradingStatus};
use crate::shared::fmt::{decimal, num};
use crate::shared::Tone;
use rust_decimal::Decimal;

/// Latest successful fetch for the positions page.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionsSnapshot {
    pub positions: Vec<Position>,
    /// Engine status; `None` when that call failed this cycle.
    pub status: Option<TradingStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionSortKey {
    Symbol,
    Side,
    Size,
    EntryPrice,
    CurrentPrice,
    Pnl,
    PnlPercentage,
    OpenedAt,
}

impl Row for Position {
    type Key = PositionSortKey;

    fn sort_value(&self, key: PositionSortKey) -> SortValue<'_> {
        match key {
            PositionSortKey::Symbol => SortValue::Text(&self.symbol),
            PositionSortKey::Side => SortValue::Text(self.side.as_str()),
            PositionSortKey::Size => SortValue::Number(self.size),
            PositionSortKey::EntryPrice => SortValue::Number(self.entry_price),
            PositionSortKey::CurrentPrice => SortValue::Number(self.current_price),
            PositionSortKey::Pnl => SortValue::Number(self.pnl),
            PositionSortKey::PnlPercentage => SortValue::Number(self.pnl_percentage),
            PositionSortKey::OpenedAt => SortValue::Time(self.opened_at),
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.symbol.as_str(), self.side.as_str()];
        if let Some(strategy) = &self.strategy {
            fields.push(strategy);
        }
        fields
    }
}

/// Display data for the positions table.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionsView {
    /// Filtered, sorted rows.
    pub rows: Vec<Position>,
    /// PnL summed over the visible rows.
    pub total_pnl: Decimal,
    pub winners: usize,
    pub losers: usize,
    /// Row count before filtering.
    pub total_count: usize,
    pub engine_running: Option<bool>,
}

impl PositionsView {
    pub fn project(
        snapshot: &PositionsSnapshot,
        prefs: &ViewPreferences<PositionSortKey>,
    ) -> Self {
        let rows = project(&snapshot.positions, prefs);
        Self {
            total_pnl: total_pnl(rows.iter().map(|p| p.pnl)),
            winners: rows.iter().filter(|p| p.pnl > 0.0).count(),
            losers: rows.iter().filter(|p| p.pnl < 0.0).count(),
            total_count: snapshot.positions.len(),
            engine_running: snapshot.status.as_ref().map(|s| s.running),
            rows,
        }
    }

    pub fn pnl_tone(&self) -> Tone {
        Tone::of_decimal(&self.total_pnl)
    }

    pub fn is_filtered(&self) -> bool {
        self.rows.len() != self.total_count
    }

    /// `"+$1,234.50"` style total.
    pub fn total_pnl_label(&self) -> String {
        decimal::signed_currency(&self.total_pnl)
    }
}

/// `"+5.20%"` style label for a row's PnL percentage.
pub fn pnl_percentage_label(position: &Position) -> String {
    num::signed_percent(&position.pnl_percentage, 2)
}
