//! # Jex Core
//!
//! Request model and error taxonomy for typed JSON exchange.
//!
//! This crate provides:
//! - An immutable [`ExchangeRequest`] description plus its builder
//! - The [`RawResponse`] pair (status code, body bytes) produced by a
//!   validated HTTP exchange
//! - The closed [`ExchangeError`] taxonomy every network failure is
//!   classified into
//!
//! ## Example
//!
//! ```rust
//! use jex_core::ExchangeRequest;
//!
//! let request = ExchangeRequest::get("https://api.example.com/items")
//!     .bearer("token-123");
//! assert_eq!(request.headers["Accept"], "application/json");
//! ```

pub mod error;
pub mod request;
pub mod response;

pub use error::*;
pub use request::*;
pub use response::*;
