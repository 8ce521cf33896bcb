//! Synthetic HTTP-like responses served from memory.
//!
//! A [`SyntheticResponse`] answers exactly one intercepted request without
//! touching the network. The host engine pulls headers once and then drains
//! the body through repeated [`SyntheticResponse::read`] and
//! [`SyntheticResponse::skip`] calls.

pub mod http;
pub mod responder;

pub use http::Header;
pub use http::HttpStatusCode;
pub use http::ResponseHead;
pub use http::ResponseHeaderSink;
pub use responder::ReadOutcome;
pub use responder::ResponseBody;
pub use responder::SyntheticResponse;

/// MIME type used for every HTML document served by the shell.
pub const MIME_TEXT_HTML: &str = "text/html";
/// MIME type used for redirect and error bodies.
pub const MIME_TEXT_PLAIN: &str = "text/plain";
