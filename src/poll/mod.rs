//! Page polling: a reducer-style state container plus the tokio task that
//! drives it.
//!
//! ```rust,ignore
//! let handle = Poller::new("positions", PollConfig::new(Duration::from_secs(10)), move || {
//!     let client = client.clone();
//!     async move { client.trading().positions().await }
//! })
//! .spawn();
//!
//! let state = handle.state();
//! if let Some(err) = state.error() { /* show banner with a Retry button */ }
//! handle.retry()?;
//! handle.stop().await;
//! ```

pub mod state;

#[cfg(feature = "poll")]
pub mod poller;

pub use state::{Action, Effect, PageState, RetryState};

#[cfg(feature = "poll")]
pub use poller::{PollConfig, PollHandle, Poller};
