//! Body buffering and telemetry previews.
//!
//! HTTP body streams are single-pass, but two consumers need the bytes: the
//! real consumer (the transport for requests, the caller for responses) and
//! the telemetry overlay, which wants a size-bounded textual preview. The
//! capturer resolves this by reading the stream fully into memory once and
//! handing out two independent views: the exact original bytes for replay,
//! and a truncation-marked preview string for the span.

use std::borrow::Cow;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::{Bytes, BytesMut};
use serde::Serialize;
use tokio::io::{AsyncRead, AsyncReadExt, ReadBuf};

use crate::error::Error;

const DEFAULT_MAX_PREVIEW_BYTES: usize = 4096;
const DEFAULT_TRUNCATION_MARKER: &str = "...truncated";

const READ_CHUNK: usize = 8 * 1024;

/// Controls how much of a body is copied into span attributes.
///
/// The policy bounds only the telemetry preview. The real body handed to the
/// transport or the caller is never truncated. A preview is always at most
/// `max_preview_bytes` plus the length of the truncation marker.
#[derive(Debug, Clone)]
pub struct CapturePolicy {
    /// Maximum number of body bytes copied into the preview.
    pub max_preview_bytes: usize,
    /// Text appended to a preview that was cut short.
    pub truncation_marker: Cow<'static, str>,
}

impl Default for CapturePolicy {
    fn default() -> Self {
        Self {
            max_preview_bytes: DEFAULT_MAX_PREVIEW_BYTES,
            truncation_marker: Cow::Borrowed(DEFAULT_TRUNCATION_MARKER),
        }
    }
}

/// A single-pass byte source for an outgoing request body.
///
/// The executor consumes it exactly once while buffering; it must not be
/// reused after being passed to a request.
pub struct RequestBody(Box<dyn AsyncRead + Send + Unpin + 'static>);

impl RequestBody {
    /// Wraps an arbitrary async reader as a request body.
    pub fn from_reader(reader: impl AsyncRead + Send + Unpin + 'static) -> Self {
        Self(Box::new(reader))
    }

    /// Serializes `value` as JSON and uses the result as the body.
    pub fn json<T: Serialize>(value: &T) -> Result<Self, Error> {
        Ok(Self::from(serde_json::to_vec(value)?))
    }
}

impl From<Vec<u8>> for RequestBody {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Box::new(io::Cursor::new(bytes)))
    }
}

impl From<Bytes> for RequestBody {
    fn from(bytes: Bytes) -> Self {
        Self(Box::new(io::Cursor::new(bytes)))
    }
}

impl From<String> for RequestBody {
    fn from(text: String) -> Self {
        Self::from(text.into_bytes())
    }
}

impl From<&'static str> for RequestBody {
    fn from(text: &'static str) -> Self {
        Self(Box::new(io::Cursor::new(text.as_bytes())))
    }
}

impl AsyncRead for RequestBody {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Pin::new(&mut *self.0).poll_read(cx, buf)
    }
}

/// A fully buffered body plus its telemetry view.
#[derive(Debug, Clone)]
pub(crate) struct CapturedBody {
    /// The exact bytes read from the stream, replayable by a second consumer.
    pub(crate) bytes: Bytes,
    /// Size-bounded preview for span attributes.
    pub(crate) preview: String,
    /// Total bytes read, independent of the preview limit.
    pub(crate) size: usize,
}

/// Reads `stream` to completion and returns the bytes together with a
/// preview derived under `policy`.
///
/// An absent stream is a zero-length capture. A read error is absorbed:
/// the capture holds whatever bytes were obtained before the error, since
/// telemetry must never abort the exchange on its own.
pub(crate) async fn capture<R>(stream: Option<R>, policy: &CapturePolicy) -> CapturedBody
where
    R: AsyncRead + Unpin,
{
    let mut buf = BytesMut::new();
    if let Some(mut stream) = stream {
        loop {
            buf.reserve(READ_CHUNK);
            match stream.read_buf(&mut buf).await {
                Ok(0) => break,
                Ok(_) => {}
                // Partial capture is still useful telemetry.
                Err(_) => break,
            }
        }
    }

    let bytes = buf.freeze();
    let preview = preview_of(&bytes, policy);
    CapturedBody {
        size: bytes.len(),
        preview,
        bytes,
    }
}

/// Decodes at most `max_preview_bytes` of `bytes` as UTF-8 (lossily) and
/// appends the truncation marker when the body was longer.
fn preview_of(bytes: &[u8], policy: &CapturePolicy) -> String {
    let limit = policy.max_preview_bytes;
    if bytes.len() <= limit {
        return String::from_utf8_lossy(bytes).into_owned();
    }

    let mut text = String::from_utf8_lossy(&bytes[..limit]).into_owned();
    // Lossy decoding can widen invalid bytes; keep the bound exact.
    truncate_to_char_boundary(&mut text, limit);
    text.push_str(&policy.truncation_marker);
    text
}

fn truncate_to_char_boundary(text: &mut String, max: usize) {
    if text.len() <= max {
        return;
    }
    let mut idx = max;
    while !text.is_char_boundary(idx) {
        idx -= 1;
    }
    text.truncate(idx);
}
