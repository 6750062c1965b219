//! kline-core
//!
//! Core types and utilities for fetching and merging weekly candle series.
//!
//! - `record`: the polymorphic wire record and its normalized date key.
//! - `provider`: the `KlineProvider` trait implemented by connectors.
//! - `timeseries`: merge utilities joining series by date key.
//! - `weekly`: window computation and the fetch/merge orchestration.
//!
//! Async runtime (Tokio)
//! ---------------------
//! This crate assumes the Tokio ecosystem as the async runtime:
//! `weekly::fetch_weekly_series` joins its two provider calls with
//! `tokio::try_join!`, so callers must run under a Tokio 1.x runtime.
#![warn(missing_docs)]

/// Unified error type shared across the workspace.
pub mod error;
/// The `KlineProvider` trait abstracting the upstream endpoints.
pub mod provider;
/// Wire record model and date-key normalization.
pub mod record;
/// Time-series utilities for merging candle series.
pub mod timeseries;
/// Historical-window computation and weekly-series orchestration.
pub mod weekly;

pub use error::KlineError;
pub use provider::KlineProvider;
pub use record::{CandleRecord, DateKey};
pub use timeseries::merge::merge_latest_wins;
pub use weekly::{
    DEFAULT_INSTRUMENT, HistoryWindow, REALTIME_LIMIT, fetch_weekly_series, history_window,
};
