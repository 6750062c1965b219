use std::collections::BTreeMap;

use kline_core::{CandleRecord, DateKey, merge_latest_wins};
use proptest::prelude::*;
use serde_json::json;

fn keyed_record(date: &str, close: i64) -> CandleRecord {
    serde_json::from_value(json!({"t": date, "c": close})).expect("record should deserialize")
}

fn arb_date() -> impl Strategy<Value = String> {
    (2015u32..2030, 1u32..13, 1u32..29).prop_map(|(y, m, d)| format!("{y:04}{m:02}{d:02}"))
}

fn arb_series() -> impl Strategy<Value = Vec<CandleRecord>> {
    proptest::collection::vec((arb_date(), 0i64..100_000), 0..60)
        .prop_map(|rows| rows.into_iter().map(|(d, c)| keyed_record(&d, c)).collect())
}

/// Reference semantics: fold every source in order, last write wins per key.
fn naive_merge(sources: &[Vec<CandleRecord>]) -> Vec<CandleRecord> {
    let mut map: BTreeMap<DateKey, CandleRecord> = BTreeMap::new();
    for source in sources {
        for rec in source {
            if let Some(key) = rec.date_key() {
                map.insert(key, rec.clone());
            }
        }
    }
    map.into_values().collect()
}

proptest! {
    #[test]
    fn last_wins_invariant(a in arb_series(), b in arb_series()) {
        let merged = merge_latest_wins([a.clone(), b.clone()]);
        prop_assert_eq!(&merged, &naive_merge(&[a, b]));

        // Ascending and unique keys for every adjacent pair.
        for pair in merged.windows(2) {
            prop_assert!(pair[0].date_key().unwrap() < pair[1].date_key().unwrap());
        }
    }

    #[test]
    fn output_length_equals_distinct_key_count(a in arb_series(), b in arb_series()) {
        let distinct: std::collections::BTreeSet<DateKey> = a
            .iter()
            .chain(b.iter())
            .filter_map(CandleRecord::date_key)
            .collect();
        let merged = merge_latest_wins([a, b]);
        prop_assert_eq!(merged.len(), distinct.len());
    }

    #[test]
    fn self_merge_is_idempotent(s in arb_series()) {
        let once = merge_latest_wins([s.clone()]);
        let twice = merge_latest_wins([s.clone(), s]);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn keyless_records_never_contribute(s in arb_series()) {
        let mut with_noise = s.clone();
        with_noise.push(serde_json::from_value(json!({"c": 1})).unwrap());
        with_noise.push(serde_json::from_value(json!({"t": null, "c": 2})).unwrap());
        prop_assert_eq!(merge_latest_wins([with_noise]), merge_latest_wins([s]));
    }
}

#[test]
fn hyphenated_and_compact_dates_collide_on_the_same_key() {
    let history = vec![keyed_record("2023-12-08", 11)];
    let realtime = vec![keyed_record("20231208", 12)];
    let merged = merge_latest_wins([history, realtime]);
    assert_eq!(merged, vec![keyed_record("20231208", 12)]);
}

#[test]
fn later_duplicates_within_one_source_overwrite_earlier_ones() {
    let source = vec![keyed_record("20240105", 1), keyed_record("2024-01-05", 2)];
    let merged = merge_latest_wins([source]);
    assert_eq!(merged, vec![keyed_record("2024-01-05", 2)]);
}

#[test]
fn empty_sources_merge_to_an_empty_series() {
    assert!(merge_latest_wins([Vec::new(), Vec::new()]).is_empty());
}
