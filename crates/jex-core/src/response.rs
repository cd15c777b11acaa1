//! Raw response produced by a validated HTTP exchange

/// Status code and body bytes of one completed HTTP exchange
///
/// A `RawResponse` only ever comes out of a transport that has already
/// confirmed the exchange was HTTP; a non-HTTP transport result is
/// converted to an error before a value of this type exists. It carries no
/// identity beyond the call that produced it and is consumed immediately by
/// the exchange layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}
