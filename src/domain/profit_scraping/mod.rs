//! Profit-scraping domain — scraper status, generated signals and risk
//! analysis, plus the start/stop controls.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::error::SdkError;
use crate::view::RiskLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scraper status. Ratios are fractions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapingStatus {
    #[serde(alias = "is_active", alias = "running")]
    pub active: bool,
    #[serde(alias = "monitored_symbols")]
    pub symbols: Vec<String>,
    pub active_positions: u32,
    pub total_profit: f64,
    pub trades_today: u32,
    pub win_rate: f64,
    #[serde(deserialize_with = "crate::shared::serde_util::opt_utc_datetime::deserialize")]
    pub started_at: Option<DateTime<Utc>>,
}

/// Body of `POST /profit-scraping/start`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StartScrapingRequest {
    pub symbols: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_positions: Option<u32>,
    /// Signals below this confidence (0..=1) are not traded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_size_usd: Option<f64>,
}

impl StartScrapingRequest {
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), SdkError> {
        if self.symbols.iter().all(|s| s.trim().is_empty()) {
            return Err(SdkError::Validation("select at least one symbol".into()));
        }
        if let Some(c) = self.min_confidence {
            if !(0.0..=1.0).contains(&c) {
                return Err(SdkError::Validation(format!(
                    "min confidence must be between 0 and 1, got {}",
                    c
                )));
            }
        }
        if let Some(size) = self.position_size_usd {
            if !(size.is_finite() && size > 0.0) {
                return Err(SdkError::Validation(
                    "position size must be a positive amount".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Direction a signal recommends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalDirection {
    #[serde(alias = "BUY", alias = "long", alias = "LONG")]
    Buy,
    #[serde(alias = "SELL", alias = "short", alias = "SHORT")]
    Sell,
    #[serde(alias = "HOLD")]
    Hold,
}

impl SignalDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalDirection::Buy => "buy",
            SignalDirection::Sell => "sell",
            SignalDirection::Hold => "hold",
        }
    }
}

/// A trade signal produced by the backend models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapingSignal {
    pub symbol: String,
    #[serde(alias = "signal", alias = "side")]
    pub direction: SignalDirection,
    /// Model confidence, 0..=1.
    pub confidence: f64,
    #[serde(default, alias = "price")]
    pub entry_price: f64,
    #[serde(default)]
    pub target_price: Option<f64>,
    #[serde(default)]
    pub stop_loss: Option<f64>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(
        default,
        alias = "timestamp",
        deserialize_with = "crate::shared::serde_util::opt_utc_datetime::deserialize"
    )]
    pub generated_at: Option<DateTime<Utc>>,
}

impl ScrapingSignal {
    /// Expected move to target as a percentage of entry, when both are known.
    pub fn expected_move_pct(&self) -> Option<f64> {
        let target = self.target_price?;
        if self.entry_price == 0.0 {
            return None;
        }
        Some((target - self.entry_price) / self.entry_price * 100.0)
    }
}

/// Portfolio risk analysis. Drawdowns and exposure are fractions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskAnalysis {
    pub current_drawdown: f64,
    pub max_drawdown: f64,
    pub total_exposure: f64,
    pub var_95: f64,
    pub risk_score: f64,
    pub warnings: Vec<String>,
}

impl RiskAnalysis {
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_drawdown(self.current_drawdown)
    }
}
