use thiserror::Error;

/// Failure kinds surfaced by the catalog client.
///
/// Every transport problem, bad HTTP status, or undecodable body is caught
/// at the client boundary and tagged here; nothing lower-level escapes to
/// callers. Controllers consume these as state flags only.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a usable HTTP response (DNS, connect,
    /// timeout, connection dropped mid-body).
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered outside the 2xx range.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The body arrived but could not be decoded as the expected envelope.
    #[error("malformed response: {0}")]
    Decode(String),

    /// A 2xx response whose envelope reported `success: false`.
    #[error("service rejected the request: {0}")]
    Rejected(String),
}

// Type alias commonly used by client operations and controllers.
pub type CatalogResult<T> = Result<T, CatalogError>;
