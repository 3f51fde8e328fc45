//! Client error types.

use thiserror::Error;

/// Error type for NetworksDB API operations.
///
/// Transport failures surface here unchanged. API-level failures do not:
/// the service reports them in the JSON body, which is returned to the
/// caller like any other response.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP/network error from reqwest (DNS, refused connection, TLS,
    /// connect timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API key could not be used as an `X-Api-Key` header value.
    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, Error>;
