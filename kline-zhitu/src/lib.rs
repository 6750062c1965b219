//! kline-zhitu
//!
//! Connector that implements `KlineProvider` on top of the Zhitu HTTP API.
//! Exposes the latest-N and historical-range weekly candle endpoints and a
//! convenience wrapper around the core fetch/merge orchestration.
#![warn(missing_docs)]

/// Client, builder, and endpoint plumbing.
pub mod client;
/// Explicitly injected API credentials.
pub mod credentials;
mod wire;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ZhituClient, ZhituClientBuilder};
pub use credentials::Credentials;
