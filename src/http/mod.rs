//! HTTP layer — `DashboardHttp` with per-request retry policies.

#[cfg(feature = "http")]
pub mod client;
pub mod retry;

#[cfg(feature = "http")]
pub use client::DashboardHttp;
pub use retry::{RetryConfig, RetryPolicy};
