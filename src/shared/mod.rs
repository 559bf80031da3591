//! Shared helpers used across all domain modules: the response envelope some
//! endpoints wrap their payload in, serde helpers, and display formatting.

pub mod envelope;
pub mod fmt;
pub mod serde_util;

pub use envelope::Envelope;
pub use fmt::Tone;
