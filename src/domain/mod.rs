//! Domain modules organized as vertical slices, one per API area.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types (serde, with aliases for the backend's spellings)
//! - `wire.rs` — The exact response shape of each endpoint
//! - `client.rs` — Sub-client with the HTTP methods

pub mod backtesting;
pub mod profit_scraping;
pub mod stats;
pub mod trading;
