//! Exchange request description and builder

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Timeout applied to every built request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP method for an exchange request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    /// The wire spelling of the method
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authorization scheme for the `Authorization` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    Bearer,
    Basic,
}

impl AuthScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            AuthScheme::Bearer => "Bearer",
            AuthScheme::Basic => "Basic",
        }
    }
}

/// An immutable description of one HTTP exchange
///
/// Built once by the constructors below and then handed to a transport.
/// Headers are a unique-key map; the body, when present, already holds the
/// encoded JSON bytes.
///
/// # Example
///
/// ```rust
/// use jex_core::{ExchangeRequest, Method};
///
/// #[derive(serde::Serialize)]
/// struct Item { id: u32 }
///
/// let request = ExchangeRequest::post("https://api.example.com/items", &Item { id: 1 })?;
/// assert_eq!(request.method, Method::Post);
/// assert_eq!(request.headers["Content-Type"], "application/json; charset=utf-8");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRequest {
    /// Fully-qualified target URL
    pub url: String,
    pub method: Method,
    /// Header map, key unique
    pub headers: BTreeMap<String, String>,
    /// Encoded body bytes, absent for fetch-style requests
    pub body: Option<Vec<u8>>,
    pub timeout: Duration,
}

impl ExchangeRequest {
    /// Build a `GET` request for fetching JSON
    ///
    /// Sets `Accept: application/json` and the default 60 second timeout.
    pub fn get(url: impl Into<String>) -> Self {
        ExchangeRequest {
            url: url.into(),
            method: Method::Get,
            headers: base_headers(),
            body: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Build a body-carrying request with an explicit method
    ///
    /// Encodes `payload` as the JSON body and sets
    /// `Content-Type: application/json; charset=utf-8` alongside the
    /// `Accept` header.
    ///
    /// # Errors
    ///
    /// Returns the encoding error if `payload` cannot be represented as
    /// JSON. A request is never built with a silently-missing body.
    pub fn send<T: Serialize>(
        url: impl Into<String>,
        method: Method,
        payload: &T,
    ) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_vec(payload)?;
        let mut headers = base_headers();
        headers.insert(
            "Content-Type".to_string(),
            "application/json; charset=utf-8".to_string(),
        );
        Ok(ExchangeRequest {
            url: url.into(),
            method,
            headers,
            body: Some(body),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Build a `POST` request carrying `payload`
    ///
    /// Shorthand for [`ExchangeRequest::send`] with [`Method::Post`].
    pub fn post<T: Serialize>(
        url: impl Into<String>,
        payload: &T,
    ) -> Result<Self, serde_json::Error> {
        Self::send(url, Method::Post, payload)
    }

    /// Attach an `Authorization: Bearer <token>` header
    pub fn bearer(self, token: &str) -> Self {
        self.authorization(AuthScheme::Bearer, token)
    }

    /// Attach an `Authorization: Basic <token>` header
    pub fn basic(self, token: &str) -> Self {
        self.authorization(AuthScheme::Basic, token)
    }

    /// Attach an `Authorization` header with the given scheme and token
    pub fn authorization(mut self, scheme: AuthScheme, token: &str) -> Self {
        self.headers.insert(
            "Authorization".to_string(),
            format!("{} {}", scheme.as_str(), token),
        );
        self
    }

    /// Override the default timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn base_headers() -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    headers.insert("Accept".to_string(), "application/json".to_string());
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Item {
        id: u32,
        name: String,
    }

    #[test]
    fn test_get_sets_accept_only() {
        let request = ExchangeRequest::get("http://localhost/items");
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.headers["Accept"], "application/json");
        assert_eq!(request.body, None);
        assert_eq!(request.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_post_sets_content_type_and_body() {
        let item = Item {
            id: 1,
            name: "a".to_string(),
        };
        let request = ExchangeRequest::post("http://localhost/items", &item).unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.headers["Accept"], "application/json");
        assert_eq!(
            request.headers["Content-Type"],
            "application/json; charset=utf-8"
        );
        assert_eq!(
            request.body.as_deref(),
            Some(br#"{"id":1,"name":"a"}"#.as_slice())
        );
    }

    #[test]
    fn test_send_with_explicit_method() {
        let item = Item {
            id: 2,
            name: "b".to_string(),
        };
        let request =
            ExchangeRequest::send("http://localhost/items/2", Method::Put, &item).unwrap();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.method.as_str(), "PUT");
    }

    #[test]
    fn test_encoding_failure_builds_no_request() {
        // JSON object keys must be strings
        let mut payload = std::collections::BTreeMap::new();
        payload.insert((1u8, 2u8), "x");
        let result = ExchangeRequest::post("http://localhost/items", &payload);
        assert!(result.is_err());
    }

    #[test]
    fn test_bearer_authorization() {
        let request = ExchangeRequest::get("http://localhost/items").bearer("token-123");
        assert_eq!(request.headers["Authorization"], "Bearer token-123");
    }

    #[test]
    fn test_basic_authorization() {
        let request = ExchangeRequest::get("http://localhost/items").basic("dXNlcjpwYXNz");
        assert_eq!(request.headers["Authorization"], "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn test_authorization_key_is_unique() {
        let request = ExchangeRequest::get("http://localhost/items")
            .bearer("first")
            .bearer("second");
        assert_eq!(request.headers["Authorization"], "Bearer second");
    }

    #[test]
    fn test_timeout_override() {
        let request =
            ExchangeRequest::get("http://localhost/items").timeout(Duration::from_secs(5));
        assert_eq!(request.timeout, Duration::from_secs(5));
    }
}
