//! Wire shapes for the profit-scraping endpoints — all enveloped.

use super::{RiskAnalysis, ScrapingSignal, ScrapingStatus};
use crate::shared::Envelope;
use serde_json::Value;

/// `GET /api/v1/profit-scraping/status`.
pub type StatusResponse = Envelope<ScrapingStatus>;

/// `POST /api/v1/profit-scraping/start` and `/stop`. The payload is an
/// acknowledgement whose shape the UI does not rely on.
pub type ControlResponse = Envelope<Value>;

/// `GET /api/v1/profit-scraping/signals`.
pub type SignalsResponse = Envelope<Vec<ScrapingSignal>>;

/// `GET /api/v1/profit-scraping/risk-analysis`.
pub type RiskAnalysisResponse = Envelope<RiskAnalysis>;
