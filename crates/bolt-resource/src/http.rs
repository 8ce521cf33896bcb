//! Response status and header contracts.

use bolt_core::BrowserError;
use bolt_core::BrowserResult;

/// HTTP status code wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HttpStatusCode(u16);

impl HttpStatusCode {
    pub const OK: Self = Self(200);
    pub const FOUND: Self = Self(302);
    pub const NOT_FOUND: Self = Self(404);
    pub const INTERNAL_SERVER_ERROR: Self = Self(500);

    pub fn as_u16(self) -> u16 {
        self.0
    }
}

/// Single response header with a wire-safe name and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: &str, value: &str) -> BrowserResult<Self> {
        if name.is_empty() || !name.bytes().all(is_token_char) {
            return Err(BrowserError::new(
                "resource.header_name_invalid",
                format!("invalid header name `{name}`"),
            ));
        }

        if value.bytes().any(|byte| matches!(byte, b'\r' | b'\n' | 0)) {
            return Err(BrowserError::new(
                "resource.header_value_invalid",
                format!("invalid characters found in header `{name}`"),
            ));
        }

        Ok(Self {
            name: name.to_owned(),
            value: value.to_owned(),
        })
    }
}

/// Destination the host engine hands over when it asks for response headers.
pub trait ResponseHeaderSink {
    fn set_status(&mut self, status: HttpStatusCode);
    fn set_mime_type(&mut self, mime_type: &str);
    /// Sets a header by name; `overwrite` replaces an existing value of the same name.
    fn set_header(&mut self, header: &Header, overwrite: bool);
}

/// Plain in-memory header sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHead {
    pub status: Option<HttpStatusCode>,
    pub mime_type: Option<String>,
    pub headers: Vec<Header>,
}

impl ResponseHead {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|header| header.name.eq_ignore_ascii_case(name))
            .map(|header| header.value.as_str())
    }
}

impl ResponseHeaderSink for ResponseHead {
    fn set_status(&mut self, status: HttpStatusCode) {
        self.status = Some(status);
    }

    fn set_mime_type(&mut self, mime_type: &str) {
        self.mime_type = Some(mime_type.to_owned());
    }

    fn set_header(&mut self, header: &Header, overwrite: bool) {
        if let Some(existing) = self
            .headers
            .iter_mut()
            .find(|existing| existing.name.eq_ignore_ascii_case(&header.name))
        {
            if overwrite {
                existing.value.clone_from(&header.value);
            }
            return;
        }

        self.headers.push(header.clone());
    }
}

fn is_token_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'.'
                | b'^'
                | b'_'
                | b'`'
                | b'|'
                | b'~'
        )
}
