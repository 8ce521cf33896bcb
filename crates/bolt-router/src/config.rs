//! Router configuration, fixed at construction.

use crate::overlay::OVERLAY_DOCUMENT;
use bolt_core::BrowserError;
use bolt_core::BrowserResult;
use bolt_resource::ResponseBody;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    internal_url: String,
    overlay_document: ResponseBody,
}

impl RouterConfig {
    /// Builds a config with the built-in overlay document.
    ///
    /// `internal_url` is used as a raw prefix, so it must be an absolute URL
    /// ending in `/` with no query or fragment.
    pub fn new(internal_url: impl Into<String>) -> BrowserResult<Self> {
        let internal_url = internal_url.into();
        validate_internal_url(&internal_url)?;

        Ok(Self {
            internal_url,
            overlay_document: ResponseBody::from(OVERLAY_DOCUMENT.as_bytes()),
        })
    }

    pub fn with_overlay_document(mut self, document: impl Into<ResponseBody>) -> Self {
        self.overlay_document = document.into();
        self
    }

    pub fn internal_url(&self) -> &str {
        &self.internal_url
    }

    pub fn overlay_document(&self) -> &ResponseBody {
        &self.overlay_document
    }
}

fn validate_internal_url(raw: &str) -> BrowserResult<()> {
    let parsed = Url::parse(raw).map_err(|error| {
        BrowserError::new(
            "router.internal_url_invalid",
            format!("failed to parse internal URL `{raw}`: {error}"),
        )
    })?;

    if parsed.cannot_be_a_base() {
        return Err(BrowserError::new(
            "router.internal_url_invalid",
            format!("internal URL `{raw}` cannot be used as a base"),
        ));
    }

    if raw.contains(['?', '#']) {
        return Err(BrowserError::new(
            "router.internal_url_invalid",
            format!("internal URL `{raw}` must not carry a query or fragment"),
        ));
    }

    if !raw.ends_with('/') {
        return Err(BrowserError::new(
            "router.internal_url_invalid",
            format!("internal URL `{raw}` must end with `/`"),
        ));
    }

    Ok(())
}
