use kline_core::CandleRecord;
use serde::Deserialize;
use serde_json::Value;

/// Response body of both candle endpoints, decoded once at the network
/// boundary.
///
/// The API answers with either a bare array of records or an object wrapping
/// the array under `data`. Any other well-formed JSON is treated as an empty
/// contribution rather than a hard failure.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Envelope {
    /// Bare array of candle records.
    Sequence(Vec<CandleRecord>),
    /// Object wrapping the records under a `data` field.
    Wrapped { data: Vec<CandleRecord> },
    /// Anything else; contributes no records.
    Other(Value),
}

impl Envelope {
    /// Unwrap into a flat record sequence.
    pub(crate) fn into_records(self) -> Vec<CandleRecord> {
        match self {
            Self::Sequence(records) | Self::Wrapped { data: records } => records,
            Self::Other(_) => Vec::new(),
        }
    }
}
