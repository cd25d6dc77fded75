//! The buffered result of one exchange.

use std::borrow::Cow;

use bytes::Bytes;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::error::Error;

/// The fully buffered result of one HTTP exchange.
///
/// Constructed once by the executor and immutable afterwards. The body holds
/// every byte the server sent; capture limits apply only to the telemetry
/// preview, never to this value.
#[derive(Debug, Clone)]
pub struct Response {
    /// Numeric status code, e.g. `200`.
    pub code: u16,
    /// Human-readable status line, e.g. `"200 OK"`.
    pub status: String,
    /// The complete response body.
    pub body: Bytes,
    /// Response headers; a name maps to its values in arrival order.
    pub headers: HeaderMap,
}

impl Response {
    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// The body decoded as UTF-8, lossily.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(code: u16, body: &'static [u8]) -> Response {
        Response {
            code,
            status: format!("{code} test"),
            body: Bytes::from_static(body),
            headers: HeaderMap::new(),
        }
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(response(200, b"").is_success());
        assert!(response(204, b"").is_success());
        assert!(!response(301, b"").is_success());
        assert!(!response(404, b"").is_success());
    }

    #[test]
    fn json_decodes_the_buffered_body() {
        let resp = response(200, br#"{"name":"orb"}"#);
        let value: serde_json::Value = resp.json().unwrap();
        assert_eq!(value["name"], "orb");
    }

    #[test]
    fn json_error_on_malformed_body() {
        let resp = response(200, b"not json");
        let result: Result<serde_json::Value, _> = resp.json();
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
