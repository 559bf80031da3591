//! Wire shapes for the trading endpoints.
//!
//! Both endpoints return bare JSON: an array of positions and a status object.

use super::{Position, TradingStatus};

/// `GET /api/v1/trading/positions` — bare array.
pub type PositionsResponse = Vec<Position>;

/// `GET /api/v1/trading/status` — bare object.
pub type StatusResponse = TradingStatus;
