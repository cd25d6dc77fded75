//! # reqtrace
//!
//! An instrumented HTTP client wrapper around [`reqwest`] that records
//! tracing telemetry for every exchange: method, URL, status code, and
//! size-bounded previews of the request and response bodies. Trace context
//! is propagated to the callee via W3C headers when an OpenTelemetry
//! propagator is installed.
//!
//! Each call performs exactly one network exchange with a single timeout and
//! returns a fully buffered [`Response`]. There are no retries and no
//! redirect policy beyond the transport default. Telemetry is best-effort:
//! when no subscriber or span is active, every recording operation is a
//! no-op, and a failure while capturing a body never fails the exchange.
//!
//! ## Example
//! ```rust,no_run
//! use reqtrace::TracedClient;
//! use std::collections::HashMap;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), reqtrace::Error> {
//!     let client = TracedClient::builder()
//!         .with_default_timeout(Duration::from_secs(30))
//!         .build()?;
//!
//!     let response = client
//!         .get("https://example.org/health", &HashMap::new(), None, 5)
//!         .await?;
//!
//!     println!("{}: {}", response.status, response.text());
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]

mod body;
mod client;
mod error;
mod response;
mod span;
mod tls;

pub use body::{CapturePolicy, RequestBody};
pub use client::{TracedClient, TracedClientBuilder};
pub use error::Error;
pub use response::Response;
pub use tls::TlsPolicy;

pub use reqwest::header::HeaderMap;
pub use reqwest::Method;
