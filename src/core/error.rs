use thiserror::Error;

/// Failure modes shared by both remote price APIs.
///
/// A malformed response body is not a `FetchError`; it surfaces as the
/// underlying decode error.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success HTTP status. The error body,
    /// if any, is not parsed.
    #[error("API error: {status}")]
    Api { status: u16 },

    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
}
