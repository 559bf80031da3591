//! Trading domain — open positions, executed trades, engine status.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a position or trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[serde(alias = "LONG", alias = "Long", alias = "buy", alias = "BUY", alias = "Buy")]
    Long,
    #[serde(alias = "SHORT", alias = "Short", alias = "sell", alias = "SELL", alias = "Sell")]
    Short,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Long => "long",
            Side::Short => "short",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An open position as reported by the trading engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub symbol: String,
    pub side: Side,
    #[serde(alias = "quantity", alias = "amount")]
    pub size: f64,
    pub entry_price: f64,
    #[serde(default, alias = "mark_price")]
    pub current_price: f64,
    /// Unrealized PnL in quote currency.
    #[serde(default, alias = "unrealized_pnl")]
    pub pnl: f64,
    /// Unrealized PnL in percent of entry notional (`5.2` means 5.2%).
    #[serde(default, alias = "pnl_percent")]
    pub pnl_percentage: f64,
    #[serde(default)]
    pub strategy: Option<String>,
    #[serde(
        default,
        alias = "entry_time",
        deserialize_with = "crate::shared::serde_util::opt_utc_datetime::deserialize"
    )]
    pub opened_at: Option<DateTime<Utc>>,
}

impl Position {
    /// Notional value at the current price.
    pub fn market_value(&self) -> f64 {
        self.size * self.current_price
    }
}

/// An executed trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    #[serde(deserialize_with = "crate::shared::serde_util::string_or_number::deserialize")]
    pub id: String,
    pub symbol: String,
    pub side: Side,
    pub price: f64,
    #[serde(alias = "size", alias = "amount")]
    pub quantity: f64,
    /// Realized PnL, present once the trade closed a position.
    #[serde(default)]
    pub pnl: Option<f64>,
    #[serde(
        alias = "executed_at",
        alias = "time",
        deserialize_with = "crate::shared::serde_util::utc_datetime::deserialize"
    )]
    pub timestamp: DateTime<Utc>,
}

/// Engine status (`GET /trading/status`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradingStatus {
    #[serde(alias = "is_running")]
    pub running: bool,
    /// `paper` or `live`.
    pub mode: String,
    pub uptime_seconds: u64,
    pub active_strategies: Vec<String>,
    #[serde(deserialize_with = "crate::shared::serde_util::opt_utc_datetime::deserialize")]
    pub last_update: Option<DateTime<Utc>>,
}
