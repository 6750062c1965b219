use thiserror::Error;

/// Unified error type for the kline workspace.
///
/// Transport, status, and decode failures abort a fetch as a whole; shape and
/// per-record anomalies are absorbed upstream and never surface here.
#[derive(Debug, Error)]
pub enum KlineError {
    /// A request could not be completed (connection error, timeout).
    #[error("{endpoint} request failed: {msg}")]
    Transport {
        /// Endpoint label that failed (e.g. "history", "latest").
        endpoint: &'static str,
        /// Human-readable error message.
        msg: String,
    },

    /// The upstream API answered with a non-success HTTP status.
    #[error("{endpoint} returned status {status}")]
    Status {
        /// Endpoint label that failed.
        endpoint: &'static str,
        /// HTTP status code.
        status: u16,
    },

    /// The response body was not valid JSON.
    #[error("{endpoint} response could not be decoded: {msg}")]
    Decode {
        /// Endpoint label whose body failed to decode.
        endpoint: &'static str,
        /// Human-readable error message.
        msg: String,
    },

    /// Invalid configuration or input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl KlineError {
    /// Helper: build a `Transport` error with the endpoint label and message.
    pub fn transport(endpoint: &'static str, msg: impl Into<String>) -> Self {
        Self::Transport {
            endpoint,
            msg: msg.into(),
        }
    }

    /// Helper: build a `Status` error for a non-success response.
    #[must_use]
    pub const fn status(endpoint: &'static str, status: u16) -> Self {
        Self::Status { endpoint, status }
    }

    /// Helper: build a `Decode` error with the endpoint label and message.
    pub fn decode(endpoint: &'static str, msg: impl Into<String>) -> Self {
        Self::Decode {
            endpoint,
            msg: msg.into(),
        }
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }
}
