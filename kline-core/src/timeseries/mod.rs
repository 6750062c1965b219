//! Time-series utilities shared by connectors and the weekly orchestration.
/// Merge utilities for joining candle series by normalized date key.
pub mod merge;
