use chrono::{DateTime, Days, Months, Utc};

use crate::error::KlineError;
use crate::provider::KlineProvider;
use crate::record::CandleRecord;
use crate::timeseries::merge::merge_latest_wins;

/// Number of recent periods requested from the latest-N endpoint.
pub const REALTIME_LIMIT: u32 = 5;

/// Placeholder instrument used when the caller has no preference.
pub const DEFAULT_INSTRUMENT: &str = "159338.SZ";

/// Date bounds of the historical range request, formatted `YYYYMMDD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryWindow {
    /// Start bound: six calendar months before the reference moment.
    pub st: String,
    /// End bound: 35 days before the reference moment.
    pub et: String,
}

/// Compute the historical window for a reference moment.
///
/// The window ends 35 days back so the historical range never contains the
/// most recent weekly candles; those come from the latest-N endpoint, which
/// is authoritative for a candle that may still be forming. Month arithmetic
/// clamps at month ends (Aug 31 minus six months is the last day of
/// February).
#[must_use]
pub fn history_window(reference_now: DateTime<Utc>) -> HistoryWindow {
    let today = reference_now.date_naive();
    let start = today.checked_sub_months(Months::new(6)).unwrap_or(today);
    let end = today.checked_sub_days(Days::new(35)).unwrap_or(today);
    HistoryWindow {
        st: start.format("%Y%m%d").to_string(),
        et: end.format("%Y%m%d").to_string(),
    }
}

/// Fetch the merged weekly candle series for one instrument.
///
/// Issues the historical-range and latest-N requests concurrently and joins
/// them all-or-nothing: if either leg fails the whole operation fails and any
/// already-resolved data is discarded. On success the two series are merged
/// by normalized date key with the realtime series taking precedence on
/// collisions, and the result is returned ascending by key.
///
/// `reference_now` is injected rather than read from the system clock so the
/// window computation is deterministic under test.
///
/// # Errors
/// Propagates the first [`KlineError`] from either request, after emitting
/// one diagnostic event. No retry is attempted.
pub async fn fetch_weekly_series<P>(
    provider: &P,
    code: &str,
    reference_now: DateTime<Utc>,
) -> Result<Vec<CandleRecord>, KlineError>
where
    P: KlineProvider + ?Sized,
{
    let window = history_window(reference_now);
    let joined = tokio::try_join!(
        provider.history(code, &window.st, &window.et),
        provider.latest(code, REALTIME_LIMIT),
    );
    let (history, latest) = match joined {
        Ok(parts) => parts,
        Err(err) => {
            tracing::error!(code, error = %err, "weekly k-line fetch failed");
            return Err(err);
        }
    };
    Ok(merge_latest_wins([history, latest]))
}
