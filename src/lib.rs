//! # trading-dashboard
//!
//! Client-side data layer for the trading system dashboard: typed access to
//! the REST API, page pollers with bounded retry and error normalization, and
//! pure view projections for the tables and summary cards.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Domain types, error types, the error normalizer, view
//!    projections (always available)
//! 2. **HTTP API** — `DashboardHttp` with per-request retry policies
//! 3. **Polling** — `PageState` reducer plus a tokio poller task and handle
//! 4. **High-Level Client** — `DashboardClient` with nested sub-clients and
//!    page pollers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use trading_dashboard::prelude::*;
//!
//! let client = DashboardClient::builder()
//!     .base_url("http://localhost:8000")
//!     .build()?;
//!
//! let strategies = client.backtesting().strategies().await?;
//!
//! let positions = client.watch_positions();
//! let state = positions.state();
//! if let Some(snapshot) = state.snapshot() {
//!     let view = PositionsView::project(snapshot, &ViewPreferences::default());
//!     println!("total pnl {}", view.total_pnl);
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Response envelope, serde helpers, display formatting.
pub mod shared;

/// API areas (vertical slices): types, wire types, sub-clients.
pub mod domain;

/// Unified error types.
pub mod error;

/// Failure classification into user-facing messages.
pub mod failure;

/// Network URL constants.
pub mod network;

/// Pure view projections (sorting, filtering, aggregates, risk buckets).
pub mod view;

/// Client configuration and environment loading.
pub mod config;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
pub mod http;

// ── Layer 3: Polling ─────────────────────────────────────────────────────────

/// Page state container and poller task.
pub mod poll;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `DashboardClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

/// Per-page fetch cycles and `watch_*` pollers.
#[cfg(all(feature = "http", feature = "poll"))]
pub mod pages;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types
    pub use crate::domain::backtesting::{
        BacktestRequest, BacktestResult, CompareRequest, EquityPoint, StrategyComparison,
        StrategyInfo,
    };
    pub use crate::domain::profit_scraping::{
        RiskAnalysis, ScrapingSignal, ScrapingStatus, SignalDirection, StartScrapingRequest,
    };
    pub use crate::domain::stats::Stats;
    pub use crate::domain::trading::{Position, Side, Trade, TradingStatus};

    // Errors
    pub use crate::error::{HttpError, SdkError};
    pub use crate::failure::{normalize, Failure};

    // Config + network
    pub use crate::config::{DashboardConfig, PollIntervals};
    pub use crate::network::{API_PREFIX, DEFAULT_API_URL};

    // Views
    pub use crate::shared::Tone;
    pub use crate::view::backtesting::{ComparisonSortKey, ComparisonView, RunSummary};
    pub use crate::view::dashboard::{DashboardSnapshot, DashboardView, TradeSortKey};
    pub use crate::view::positions::{PositionSortKey, PositionsSnapshot, PositionsView};
    pub use crate::view::profit_scraping::{
        ProfitScrapingSnapshot, ProfitScrapingView, SignalSortKey,
    };
    pub use crate::view::{RiskLevel, SortDirection, ViewPreferences};

    // Polling
    pub use crate::poll::{PageState, RetryState};
    #[cfg(feature = "poll")]
    pub use crate::poll::{PollConfig, PollHandle, Poller};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        BacktestingClient, DashboardClient, DashboardClientBuilder, ProfitScrapingClient,
        TradingClient,
    };
    #[cfg(feature = "http")]
    pub use crate::domain::stats::client::StatsClient;
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
