use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kline_core::{CandleRecord, KlineError, KlineProvider};
use url::Url;

use crate::credentials::Credentials;
use crate::wire::Envelope;

/// Default Zhitu API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.zhituapi.com";

/// Default per-request timeout applied to the built-in HTTP client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// Both endpoints are fixed to weekly, forward-adjusted candles.
const PERIOD_WEEKLY: &str = "w";
const ADJUST_FORWARD: &str = "f";

/// Client for the Zhitu candle endpoints.
///
/// Cheap to clone; each invocation is an independent pipeline over its own
/// local data, so concurrent use needs no locking.
#[derive(Debug, Clone)]
pub struct ZhituClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
}

impl ZhituClient {
    /// Returns a builder with the default base URL and timeout.
    #[must_use]
    pub fn builder(credentials: Credentials) -> ZhituClientBuilder {
        ZhituClientBuilder {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            credentials,
            http: None,
        }
    }

    /// Fetch the merged weekly candle series for `code`.
    ///
    /// Convenience forwarding to [`kline_core::fetch_weekly_series`] with
    /// this client as the provider.
    ///
    /// # Errors
    /// Propagates the first [`KlineError`] from either underlying request.
    pub async fn fetch_weekly_series(
        &self,
        code: &str,
        reference_now: DateTime<Utc>,
    ) -> Result<Vec<CandleRecord>, KlineError> {
        kline_core::fetch_weekly_series(self, code, reference_now).await
    }

    fn endpoint_url(&self, leg: &'static str, code: &str) -> Result<Url, KlineError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| KlineError::invalid_arg("base URL cannot carry path segments"))?
            .pop_if_empty()
            .extend(["hs", leg, code, PERIOD_WEEKLY, ADJUST_FORWARD]);
        Ok(url)
    }

    async fn get_records(
        &self,
        endpoint: &'static str,
        code: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<CandleRecord>, KlineError> {
        let url = self.endpoint_url(endpoint, code)?;
        tracing::debug!(endpoint, code, "requesting weekly candles");
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| KlineError::transport(endpoint, e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(KlineError::status(endpoint, status.as_u16()));
        }
        let envelope: Envelope = response
            .json()
            .await
            .map_err(|e| KlineError::decode(endpoint, e.to_string()))?;
        Ok(envelope.into_records())
    }
}

#[async_trait]
impl KlineProvider for ZhituClient {
    async fn latest(&self, code: &str, limit: u32) -> Result<Vec<CandleRecord>, KlineError> {
        let limit = limit.to_string();
        let query = [
            ("token", self.credentials.token()),
            ("limit", limit.as_str()),
        ];
        self.get_records("latest", code, &query).await
    }

    async fn history(
        &self,
        code: &str,
        st: &str,
        et: &str,
    ) -> Result<Vec<CandleRecord>, KlineError> {
        let query = [
            ("token", self.credentials.token()),
            ("st", st),
            ("et", et),
        ];
        self.get_records("history", code, &query).await
    }
}

/// Builder for [`ZhituClient`].
#[derive(Debug)]
pub struct ZhituClientBuilder {
    base_url: String,
    timeout: Duration,
    credentials: Credentials,
    http: Option<reqwest::Client>,
}

impl ZhituClientBuilder {
    /// Override the API origin (useful for proxies and tests).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-request timeout of the built-in HTTP client.
    ///
    /// Ignored when a custom client is supplied.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Supply a pre-configured `reqwest::Client` instead of the built-in one.
    #[must_use]
    pub fn custom_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Validate the configuration and construct the client.
    ///
    /// # Errors
    /// Returns [`KlineError::InvalidArg`] if the base URL does not parse or
    /// the HTTP client cannot be built.
    pub fn build(self) -> Result<ZhituClient, KlineError> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| KlineError::invalid_arg(format!("invalid base URL: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(KlineError::invalid_arg(
                "base URL cannot carry path segments",
            ));
        }
        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| KlineError::invalid_arg(format!("failed to build HTTP client: {e}")))?,
        };
        Ok(ZhituClient {
            http,
            base_url,
            credentials: self.credentials,
        })
    }
}
