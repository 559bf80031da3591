//! Network constants for the trading system API.

/// Default REST API base URL (local backend).
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Path prefix shared by every versioned endpoint.
pub const API_PREFIX: &str = "/api/v1";
