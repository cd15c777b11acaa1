//! # Jex HTTP
//!
//! HTTP transport validation and structured JSON exchange.
//!
//! This crate provides:
//! - The [`Transport`] seam plus the reqwest-backed [`HttpTransport`],
//!   which guarantees its caller sees either a validated HTTP exchange or
//!   a classified error
//! - The [`JsonExchange`] trait with provided `fetch`/`submit` methods and
//!   the concrete [`JsonClient`]
//! - A [`ConnectivityMonitor`] that observes reachability independently of
//!   any exchange outcome
//!
//! ## Example
//!
//! ```rust,ignore
//! use jex_core::ExchangeRequest;
//! use jex_http::{JsonClient, JsonExchange};
//!
//! let client = JsonClient::new();
//! let items: Vec<Item> = client
//!     .fetch(ExchangeRequest::get("https://api.example.com/items"))
//!     .await?;
//! ```

mod exchange;
mod status;
mod transport;

pub use exchange::{JsonClient, JsonExchange};
pub use status::{Connectivity, ConnectivityMonitor};
pub use transport::{HttpTransport, Transport};
