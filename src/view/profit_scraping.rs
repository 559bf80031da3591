//! Profit-scraping page: scraper status, signal table and risk panel.

use super::{project, to_decimal, Row, RiskLevel, SortValue, ViewPreferences};
use crate::domain::profit_scraping::{RiskAnalysis, ScrapingSignal, ScrapingStatus};
use crate::shared::fmt::{decimal, num};
use crate::shared::Tone;

/// Signals at or above this confidence are highlighted.
pub const STRONG_SIGNAL_CONFIDENCE: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct ProfitScrapingSnapshot {
    pub status: ScrapingStatus,
    pub signals: Option<Vec<ScrapingSignal>>,
    pub risk: Option<RiskAnalysis>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalSortKey {
    Symbol,
    Direction,
    Confidence,
    EntryPrice,
    ExpectedMove,
    GeneratedAt,
}

impl Row for ScrapingSignal {
    type Key = SignalSortKey;

    fn sort_value(&self, key: SignalSortKey) -> SortValue<'_> {
        match key {
            SignalSortKey::Symbol => SortValue::Text(&self.symbol),
            SignalSortKey::Direction => SortValue::Text(self.direction.as_str()),
            SignalSortKey::Confidence => SortValue::Number(self.confidence),
            SignalSortKey::EntryPrice => SortValue::Number(self.entry_price),
            SignalSortKey::ExpectedMove => {
                SortValue::Number(self.expected_move_pct().unwrap_or(0.0))
            }
            SignalSortKey::GeneratedAt => SortValue::Time(self.generated_at),
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.symbol.as_str(), self.direction.as_str()];
        if let Some(reason) = &self.reason {
            fields.push(reason);
        }
        fields
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfitScrapingView {
    pub active: bool,
    pub symbols: Vec<String>,
    pub total_profit: f64,
    pub win_rate: f64,
    pub signals: Vec<ScrapingSignal>,
    /// Visible signals at or above [`STRONG_SIGNAL_CONFIDENCE`].
    pub strong_signals: usize,
    /// `None` when the risk analysis call failed this cycle.
    pub risk_level: Option<RiskLevel>,
    pub warnings: Vec<String>,
}

impl ProfitScrapingView {
    pub fn project(
        snapshot: &ProfitScrapingSnapshot,
        prefs: &ViewPreferences<SignalSortKey>,
    ) -> Self {
        let signals = snapshot
            .signals
            .as_deref()
            .map(|s| project(s, prefs))
            .unwrap_or_default();
        let strong_signals = signals
            .iter()
            .filter(|s| s.confidence >= STRONG_SIGNAL_CONFIDENCE)
            .count();

        Self {
            active: snapshot.status.active,
            symbols: snapshot.status.symbols.clone(),
            total_profit: snapshot.status.total_profit,
            win_rate: snapshot.status.win_rate,
            signals,
            strong_signals,
            risk_level: snapshot.risk.as_ref().map(RiskAnalysis::risk_level),
            warnings: snapshot
                .risk
                .as_ref()
                .map(|r| r.warnings.clone())
                .unwrap_or_default(),
        }
    }

    pub fn profit_tone(&self) -> Tone {
        Tone::of_f64(self.total_profit)
    }

    /// Compact card figure, e.g. `"1.25K"`.
    pub fn total_profit_label(&self) -> String {
        decimal::abbr_number(&to_decimal(self.total_profit), Some(2), None)
    }

    pub fn win_rate_label(&self) -> String {
        num::ratio_as_percent(&self.win_rate, 1)
    }
}

/// `"+4%"` style label for a signal's expected move, `"-"` when unknown.
pub fn expected_move_label(signal: &ScrapingSignal) -> String {
    signal
        .expected_move_pct()
        .map(|pct| num::signed_percent(&pct, 2))
        .unwrap_or_else(|| "-".to_string())
}
