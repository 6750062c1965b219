use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One candle data point as received from the wire.
///
/// The upstream API returns either positional rows (date at index 0) or keyed
/// objects (date under `t`, `date`, or `time`). Price/volume payload fields
/// are opaque to this crate and pass through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CandleRecord {
    /// Positional record: an ordered sequence whose first element is the date.
    Row(Vec<Value>),
    /// Keyed record: a mapping with the date under `t`, `date`, or `time`.
    Fields(Map<String, Value>),
}

impl CandleRecord {
    /// Raw date value of this record, if present.
    ///
    /// Positional rows use index 0 only. Keyed records take the first of
    /// `t`, `date`, `time` whose value normalizes to a key, so a null or
    /// otherwise falsy `t` falls through to `date` and then `time`.
    #[must_use]
    pub fn date_value(&self) -> Option<&Value> {
        match self {
            Self::Row(fields) => fields.first(),
            Self::Fields(map) => ["t", "date", "time"]
                .iter()
                .filter_map(|k| map.get(*k))
                .find(|v| DateKey::from_value(v).is_some()),
        }
    }

    /// Canonical deduplication key of this record.
    ///
    /// `None` when the date field is missing or does not normalize; such
    /// records are silently dropped from merged output.
    #[must_use]
    pub fn date_key(&self) -> Option<DateKey> {
        self.date_value().and_then(DateKey::from_value)
    }
}

/// Canonical `YYYYMMDD` date key derived from a record's date field.
///
/// Keys compare lexicographically, which orders dates correctly because the
/// format is fixed-width. Epoch timestamps mixed with `YYYYMMDD` strings
/// across sources are not converted to a common form; with weekly data the
/// upstream is consistent in practice. Known limitation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(String);

impl DateKey {
    /// Derive a key from a raw wire date value.
    ///
    /// Numbers render as their decimal string (whole-valued floats without a
    /// trailing `.0`, so `20240105.0` collides with `"20240105"`); strings
    /// have `-` separators stripped (`"2024-01-05"` becomes `"20240105"`).
    /// Null, zero, empty strings, and non-scalar values yield `None`.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let normalized = match value {
            Value::Number(n) => {
                if n.as_f64().is_some_and(|v| v == 0.0) {
                    return None;
                }
                if let Some(i) = n.as_i64() {
                    i.to_string()
                } else if let Some(u) = n.as_u64() {
                    u.to_string()
                } else {
                    match n.as_f64() {
                        Some(f) if f.fract() == 0.0 => format!("{f:.0}"),
                        _ => n.to_string(),
                    }
                }
            }
            Value::String(s) => {
                if s.contains('-') {
                    s.replace('-', "")
                } else {
                    s.clone()
                }
            }
            _ => return None,
        };
        if normalized.is_empty() {
            return None;
        }
        Some(Self(normalized))
    }

    /// The normalized key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
