use async_trait::async_trait;

use crate::error::KlineError;
use crate::record::CandleRecord;

/// Abstraction over the two upstream candle endpoints (so connectors can be
/// swapped and tests can inject fakes).
///
/// Both endpoints are scoped to one instrument with a fixed period and
/// adjustment mode chosen by the connector.
#[async_trait]
pub trait KlineProvider: Send + Sync {
    /// Fetch the most recent `limit` candles for `code`.
    async fn latest(&self, code: &str, limit: u32) -> Result<Vec<CandleRecord>, KlineError>;

    /// Fetch candles for `code` between `st` and `et` (inclusive bounds,
    /// `YYYYMMDD` strings).
    async fn history(
        &self,
        code: &str,
        st: &str,
        et: &str,
    ) -> Result<Vec<CandleRecord>, KlineError>;
}
