//! Wire shapes for the generic stats, positions and trades endpoints.

use super::Stats;
use crate::domain::trading::{Position, Trade};

/// `GET /api/v1/stats` — bare object.
pub type StatsResponse = Stats;

/// `GET /api/v1/positions` — bare array.
pub type PositionsResponse = Vec<Position>;

/// `GET /api/v1/trades` — bare array, newest first.
pub type TradesResponse = Vec<Trade>;
