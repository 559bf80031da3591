//! View state projection — pure derivations from a snapshot and the user's
//! view preferences.
//!
//! Nothing here caches: a view is rebuilt from `(snapshot, preferences)` every
//! time either changes, and the same inputs always give the same output.

pub mod backtesting;
pub mod dashboard;
pub mod positions;
pub mod profit_scraping;

use crate::shared::Tone;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::cmp::Ordering;

// ─── Preferences ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Transient, user-driven table settings. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewPreferences<K> {
    /// `None` keeps the server's order.
    pub sort_key: Option<K>,
    pub direction: SortDirection,
    /// Case-insensitive substring filter; blank matches everything.
    pub filter: String,
}

impl<K> Default for ViewPreferences<K> {
    fn default() -> Self {
        Self {
            sort_key: None,
            direction: SortDirection::Ascending,
            filter: String::new(),
        }
    }
}

impl<K: Copy + PartialEq> ViewPreferences<K> {
    pub fn sorted_by(key: K, direction: SortDirection) -> Self {
        Self {
            sort_key: Some(key),
            direction,
            filter: String::new(),
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Column-header click: the active key flips direction, a new key sorts
    /// ascending.
    pub fn toggle_sort(&mut self, key: K) {
        if self.sort_key == Some(key) {
            self.direction = self.direction.toggled();
        } else {
            self.sort_key = Some(key);
            self.direction = SortDirection::Ascending;
        }
    }
}

// ─── Rows ────────────────────────────────────────────────────────────────────

/// A comparable cell value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Number(f64),
    Text(&'a str),
    /// Missing timestamps sort first.
    Time(Option<DateTime<Utc>>),
}

impl SortValue<'_> {
    fn compare(&self, other: &SortValue<'_>) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (SortValue::Time(a), SortValue::Time(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// A table row that can be sorted and filtered.
pub trait Row {
    type Key: Copy;

    fn sort_value(&self, key: Self::Key) -> SortValue<'_>;

    /// Fields the free-text filter searches.
    fn search_fields(&self) -> Vec<&str>;

    fn matches(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle_lower))
    }
}

/// Filter, then stable-sort, a list of rows.
pub fn project<R>(rows: &[R], prefs: &ViewPreferences<R::Key>) -> Vec<R>
where
    R: Row + Clone,
{
    let needle = prefs.filter.trim().to_lowercase();
    let mut out: Vec<R> = rows.iter().filter(|r| r.matches(&needle)).cloned().collect();

    if let Some(key) = prefs.sort_key {
        out.sort_by(|a, b| {
            let ord = a.sort_value(key).compare(&b.sort_value(key));
            match prefs.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }
    out
}

// ─── Aggregates ──────────────────────────────────────────────────────────────

/// Exact sum of PnL values. Non-finite values contribute zero; empty is zero.
/// A total beyond the `Decimal` range saturates at `Decimal::MAX`/`MIN`.
pub fn total_pnl<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = f64>,
{
    let mut total = Decimal::ZERO;
    let mut saturated = false;
    for value in values {
        let value = to_decimal(value);
        total = total.checked_add(value).unwrap_or_else(|| {
            saturated = true;
            saturate(value.is_sign_negative())
        });
    }
    if saturated {
        tracing::warn!(%total, "PnL total out of decimal range; saturated");
    }
    total
}

/// Exact decimal for a wire float. Non-finite values become zero; finite
/// values outside the `Decimal` range saturate.
pub fn to_decimal(value: f64) -> Decimal {
    if !value.is_finite() {
        return Decimal::ZERO;
    }
    Decimal::try_from(value).unwrap_or_else(|_| {
        tracing::warn!(value, "PnL value out of decimal range; saturated");
        saturate(value < 0.0)
    })
}

fn saturate(negative: bool) -> Decimal {
    if negative {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

pub const HIGH_RISK_DRAWDOWN: f64 = 0.15;
pub const MEDIUM_RISK_DRAWDOWN: f64 = 0.10;

/// Drawdown risk bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Buckets a drawdown fraction by magnitude (`-0.2` and `0.2` are both
    /// high). Boundaries are exclusive: exactly `0.15` is medium.
    pub fn from_drawdown(drawdown: f64) -> Self {
        let magnitude = drawdown.abs();
        if magnitude > HIGH_RISK_DRAWDOWN {
            RiskLevel::High
        } else if magnitude > MEDIUM_RISK_DRAWDOWN {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    pub fn palette(&self) -> &'static str {
        match self {
            RiskLevel::Low => "success",
            RiskLevel::Medium => "warning",
            RiskLevel::High => "error",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tone for a decimal aggregate.
pub fn tone_of(value: &Decimal) -> Tone {
    Tone::of_decimal(value)
}
