//! Error kinds surfaced by the executor.

use std::time::Duration;

/// Errors returned by [`crate::TracedClient`].
///
/// Construction kinds (`InvalidUrl`, `InvalidHeader`, `Json`, `ClientBuild`)
/// fail before any network I/O. Transport kinds (`Timeout`, `Transport`)
/// stop the exchange and are recorded on the span. An HTTP status of 400 or
/// above is *not* an error: the full [`crate::Response`] is returned and
/// only the span is marked, since interpreting status codes is the caller's
/// policy. A `Response` and an `Error` are mutually exclusive.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The request URL could not be parsed as an absolute URL.
    #[error("invalid request URL")]
    InvalidUrl(#[from] url::ParseError),

    /// A caller-supplied header had an invalid name or value.
    #[error("invalid header `{0}`")]
    InvalidHeader(String),

    /// JSON (de)serialization of a body failed.
    #[error("invalid JSON body")]
    Json(#[from] serde_json::Error),

    /// The underlying HTTP client could not be constructed.
    #[error("failed to construct HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    /// The exchange did not complete within its timeout bound.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection, DNS, or TLS failure while performing the exchange.
    #[error("transport error")]
    Transport(#[source] reqwest::Error),
}
