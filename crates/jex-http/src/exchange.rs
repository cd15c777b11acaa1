//! Structured JSON exchange over a validated transport

use crate::transport::{HttpTransport, Transport};
use async_trait::async_trait;
use jex_core::{ExchangeError, ExchangeRequest, RawResponse};
use serde::de::DeserializeOwned;

/// The single success criterion: any other status fails, whatever the body.
const STATUS_OK: u16 = 200;

/// Typed fetch/submit over a [`Transport`]
///
/// The two operations share one decision order: transport errors propagate
/// unchanged, then the status gate, then (for `fetch`) the decode. The gate
/// comes first so a server-side error envelope carried on a 4xx/5xx is
/// never decoded against the caller's expected shape.
///
/// Implementers only supply [`transport`](JsonExchange::transport); both
/// operations are provided, so the ordering lives in exactly one place.
#[async_trait]
pub trait JsonExchange: Send + Sync {
    /// The transport every exchange runs through
    fn transport(&self) -> &dyn Transport;

    /// Fetch a JSON payload and decode it into `T`
    ///
    /// # Errors
    ///
    /// Any [`ExchangeError`] from the transport, unchanged;
    /// [`ExchangeError::Status`] for a non-200 answer (body discarded
    /// undecoded); [`ExchangeError::Json`] when a 200 body does not decode
    /// into `T`.
    async fn fetch<T>(&self, request: ExchangeRequest) -> Result<T, ExchangeError>
    where
        T: DeserializeOwned,
    {
        let response = self.transport().execute(&request).await?;
        let body = accepted_body(response)?;
        serde_json::from_slice(&body).map_err(ExchangeError::Json)
    }

    /// Send a request whose body is already encoded, confirming by status
    ///
    /// The response body, if any, is ignored.
    ///
    /// # Errors
    ///
    /// Any [`ExchangeError`] from the transport, unchanged;
    /// [`ExchangeError::Status`] for a non-200 answer.
    async fn submit(&self, request: ExchangeRequest) -> Result<(), ExchangeError> {
        let response = self.transport().execute(&request).await?;
        accepted_body(response)?;
        Ok(())
    }
}

/// Status gate shared by both operations
fn accepted_body(response: RawResponse) -> Result<Vec<u8>, ExchangeError> {
    if response.status != STATUS_OK {
        tracing::warn!(status = response.status, "exchange rejected by status");
        return Err(ExchangeError::Status(response.status));
    }
    Ok(response.body)
}

/// Concrete [`JsonExchange`] with an injected transport
///
/// Defaults to the reqwest-backed [`HttpTransport`]; tests inject a
/// substitute through [`JsonClient::with_transport`].
pub struct JsonClient<T: Transport = HttpTransport> {
    transport: T,
}

impl JsonClient<HttpTransport> {
    pub fn new() -> Self {
        JsonClient {
            transport: HttpTransport::new(),
        }
    }
}

impl Default for JsonClient<HttpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> JsonClient<T> {
    pub fn with_transport(transport: T) -> Self {
        JsonClient { transport }
    }
}

impl<T: Transport> JsonExchange for JsonClient<T> {
    fn transport(&self) -> &dyn Transport {
        &self.transport
    }
}
