//! Pull-stream responder for one intercepted request.

use crate::http::Header;
use crate::http::HttpStatusCode;
use crate::http::ResponseHeaderSink;
use bolt_core::BrowserResult;
use std::borrow::Cow;
use std::sync::Arc;

/// Immutable body bytes, shared between the page table and in-flight responses.
pub type ResponseBody = Arc<[u8]>;

/// Result of a single [`SyntheticResponse::read`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// This many bytes were copied; more data may follow.
    ///
    /// Reported even when the copy reached the end of the body exactly, so a
    /// short read never implies completion.
    Data(usize),
    /// No bytes remain. Terminal, not an error.
    Complete,
}

/// In-memory response with a status, MIME type, optional redirect target and
/// a body consumed through a monotonic cursor.
///
/// Owned by exactly one request and driven by one caller at a time, so it
/// carries no synchronisation of its own.
#[derive(Debug, Clone)]
pub struct SyntheticResponse {
    status: HttpStatusCode,
    mime_type: Cow<'static, str>,
    location: Option<Header>,
    body: ResponseBody,
    cursor: usize,
}

impl SyntheticResponse {
    pub fn new(
        status: HttpStatusCode,
        mime_type: impl Into<Cow<'static, str>>,
        body: impl Into<ResponseBody>,
    ) -> Self {
        Self {
            status,
            mime_type: mime_type.into(),
            location: None,
            body: body.into(),
            cursor: 0,
        }
    }

    /// Attaches a `Location` header; fails if the target is not wire-safe.
    pub fn with_location(mut self, location: &str) -> BrowserResult<Self> {
        self.location = Some(Header::new("Location", location)?);
        Ok(self)
    }

    pub fn status(&self) -> HttpStatusCode {
        self.status
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_ref().map(|header| header.value.as_str())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.body.len() - self.cursor
    }

    /// Always accepts the request; the response is ready immediately.
    pub fn open(&mut self) -> bool {
        true
    }

    /// Writes status, MIME type and the optional `Location` header into `sink`
    /// and returns the total body length.
    pub fn describe_headers(&self, sink: &mut dyn ResponseHeaderSink) -> u64 {
        sink.set_status(self.status);
        sink.set_mime_type(&self.mime_type);
        if let Some(location) = &self.location {
            sink.set_header(location, false);
        }
        self.body.len() as u64
    }

    /// Copies up to `out.len()` bytes from the cursor.
    ///
    /// Completion is only reported by the call made after the cursor has
    /// reached the end; the call that copies the final bytes still reports
    /// [`ReadOutcome::Data`].
    pub fn read(&mut self, out: &mut [u8]) -> ReadOutcome {
        if self.cursor == self.body.len() {
            return ReadOutcome::Complete;
        }

        let count = out.len().min(self.remaining());
        let end = self.cursor + count;
        out[..count].copy_from_slice(&self.body[self.cursor..end]);
        self.cursor = end;
        ReadOutcome::Data(count)
    }

    /// Advances the cursor by at most `requested` bytes and returns the
    /// amount actually skipped.
    pub fn skip(&mut self, requested: u64) -> u64 {
        let remaining = self.remaining();
        let count = usize::try_from(requested).map_or(remaining, |value| value.min(remaining));
        self.cursor += count;
        count as u64
    }

    /// Forces end-of-stream. Idempotent.
    pub fn cancel(&mut self) {
        self.cursor = self.body.len();
    }
}
