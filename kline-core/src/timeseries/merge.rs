use std::collections::BTreeMap;

use crate::record::{CandleRecord, DateKey};

/// Merge candle series in precedence order (last source is authoritative).
///
/// - Records are keyed by their normalized date key; plain insertion gives
///   last-write-wins, so a later source replaces an earlier one on collision
///   and later duplicates within a single source overwrite earlier ones.
/// - Records with no derivable date key are silently dropped.
/// - The result is sorted ascending by key, and keys are unique by
///   construction.
#[must_use]
pub fn merge_latest_wins<I>(sources: I) -> Vec<CandleRecord>
where
    I: IntoIterator<Item = Vec<CandleRecord>>,
{
    let mut map: BTreeMap<DateKey, CandleRecord> = BTreeMap::new();
    for source in sources {
        for record in source {
            let Some(key) = record.date_key() else {
                continue;
            };
            map.insert(key, record);
        }
    }
    map.into_values().collect()
}
