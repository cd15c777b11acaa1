//! Transport seam and the reqwest-backed implementation

use async_trait::async_trait;
use jex_core::{ExchangeError, ExchangeRequest, Method, RawResponse};
use reqwest::Client;

/// One network round trip, validated as an HTTP exchange
///
/// Implementations execute exactly one request and return either the
/// status/body pair of a genuine HTTP exchange or a classified
/// [`ExchangeError`], never a raw transport result. Failures are not
/// retried here; retry policy belongs to the caller. An error that is
/// already classified must be returned as-is, never wrapped a second time.
///
/// The trait is object-safe so a substitute transport can be injected for
/// deterministic tests.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &ExchangeRequest) -> Result<RawResponse, ExchangeError>;
}

/// Reqwest-backed [`Transport`]
///
/// Holds a [`reqwest::Client`] (cheap to clone, pools connections
/// internally). Per-request timeouts come from the request itself.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        HttpTransport {
            client: Client::new(),
        }
    }

    /// Wrap a pre-configured client (proxies, TLS settings, ...)
    pub fn with_client(client: Client) -> Self {
        HttpTransport { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &ExchangeRequest) -> Result<RawResponse, ExchangeError> {
        let url = reqwest::Url::parse(&request.url).map_err(ExchangeError::general)?;

        // Reqwest can only ever complete an HTTP exchange, so the non-HTTP
        // case is decided at the scheme, before dispatch.
        if url.scheme() != "http" && url.scheme() != "https" {
            tracing::warn!(url = %request.url, "rejected non-HTTP scheme");
            return Err(ExchangeError::NonHttp);
        }

        let mut builder = self
            .client
            .request(reqwest_method(request.method), url)
            .timeout(request.timeout);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        tracing::debug!(method = %request.method, url = %request.url, "executing exchange");
        let response = builder.send().await.map_err(ExchangeError::general)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(ExchangeError::general)?;
        tracing::debug!(status, bytes = body.len(), "exchange completed");

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
        Method::Patch => reqwest::Method::PATCH,
    }
}
