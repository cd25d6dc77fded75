//! Span attribute recording for one HTTP exchange.
//!
//! All operations take a [`Span`] handle and become no-ops when the span is
//! disabled (no subscriber, or `Span::none()`): tracing is optional
//! instrumentation, never required for correctness. Terminal status is
//! written to the `otel.status_code` / `otel.status_message` fields consumed
//! by `tracing-opentelemetry`; exactly one of [`record_failure`] and
//! [`finish`] runs per exchange.
//!
//! Attribute keys are fixed for the lifetime of the span (declared empty at
//! span creation in the executor) and nothing is recorded after `finish`.

use std::fmt;

use tracing::Span;

/// Attaches the request body preview and its real size.
pub(crate) fn record_request_body(span: &Span, preview: &str, size: usize) {
    span.record("http.request.body", preview);
    span.record("http.request.body.size", size as u64);
}

/// Attaches the response status code, body preview, and real body size.
pub(crate) fn record_response(span: &Span, status: u16, preview: &str, size: usize) {
    span.record("http.status_code", u64::from(status));
    span.record("http.response.body", preview);
    span.record("http.response.body.size", size as u64);
}

/// Marks the span as failed before any response exists (request construction
/// or transport failure) and attaches the error's description.
pub(crate) fn record_failure(span: &Span, error: &dyn fmt::Display) {
    span.record("otel.status_code", "ERROR");
    span.record("otel.status_message", tracing::field::display(error));
    tracing::error!(parent: span, error = %error, "HTTP request failed");
}

/// Sets the terminal status from the HTTP status code: ok below 400,
/// error otherwise.
pub(crate) fn finish(span: &Span, status: u16) {
    if is_error_status(status) {
        span.record("otel.status_code", "ERROR");
        span.record("otel.status_message", format!("status={status}").as_str());
        tracing::error!(parent: span, status, "HTTP request did not succeed");
    } else {
        span.record("otel.status_code", "OK");
        tracing::info!(parent: span, status, "HTTP request succeeded");
    }
}

fn is_error_status(status: u16) -> bool {
    status >= 400
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_boundary_is_400() {
        assert!(!is_error_status(200));
        assert!(!is_error_status(399));
        assert!(is_error_status(400));
        assert!(is_error_status(503));
    }

    #[test]
    fn recording_on_a_disabled_span_is_a_no_op() {
        let span = Span::none();
        record_request_body(&span, "preview", 7);
        record_response(&span, 200, "pong", 4);
        record_failure(&span, &"connection refused");
        finish(&span, 200);
        finish(&span, 500);
    }
}
