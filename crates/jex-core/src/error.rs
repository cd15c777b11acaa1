//! Error taxonomy for exchange operations

use thiserror::Error;

/// Errors that can occur while exchanging JSON with a server
///
/// Exactly one variant triggers per failure, and it is propagated to the
/// caller unchanged. [`General`](ExchangeError::General) and
/// [`NonHttp`](ExchangeError::NonHttp) mean the request never produced a
/// valid HTTP exchange; [`Status`](ExchangeError::Status) and
/// [`Json`](ExchangeError::Json) mean it did.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// Transport-level failure not otherwise classified (connection
    /// refused, timeout, cancellation).
    #[error("network error: {0}")]
    General(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The exchange completed but the server answered with a status code
    /// other than 200. The response body is discarded undecoded.
    #[error("server returned status {0}")]
    Status(u16),

    /// The server answered 200 but the body did not decode into the
    /// expected shape.
    #[error("JSON error: {0}")]
    Json(#[source] serde_json::Error),

    /// Payload shape validation beyond decoding. Reserved; no current
    /// operation constructs it.
    #[error("response data not valid")]
    DataNotValid,

    /// The transport result was not an HTTP exchange.
    #[error("not an HTTP exchange")]
    NonHttp,
}

impl ExchangeError {
    /// Classify a foreign transport failure as [`ExchangeError::General`]
    pub fn general(cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        ExchangeError::General(cause.into())
    }

    /// Whether a valid HTTP exchange took place before this error arose
    pub fn exchange_completed(&self) -> bool {
        matches!(self, ExchangeError::Status(_) | ExchangeError::Json(_))
    }
}
