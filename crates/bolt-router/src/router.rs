//! Per-request routing decision.
//!
//! Rules are evaluated in a fixed order and the first match wins:
//! overlay main frame, social-auth callback, localhost game-auth callback,
//! internal virtual filesystem, and finally pass-through to the network.

use crate::config::RouterConfig;
use crate::pages::VirtualPages;
use crate::rules::internal_path;
use crate::rules::match_game_auth;
use crate::rules::match_social_auth;
use bolt_core::BrowserResult;
use bolt_core::SessionId;
use bolt_resource::HttpStatusCode;
use bolt_resource::MIME_TEXT_HTML;
use bolt_resource::MIME_TEXT_PLAIN;
use bolt_resource::ResponseBody;
use bolt_resource::SyntheticResponse;
use bolt_window::WindowRegistry;
use encoding_rs::UTF_8;
use std::borrow::Cow;
use std::sync::Arc;

const MOVED_BODY: &[u8] = b"Moved\n";
const NOT_FOUND_BODY: &[u8] = b"Not Found\n";
const SERVER_ERROR_BODY: &[u8] = b"Internal Server Error\n";
const INDEX_LOCATION: &str = "/index.html";

/// Upload body as delivered by the host: an ordered list of elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestBody {
    pub elements: Vec<Vec<u8>>,
}

impl RequestBody {
    pub fn new(elements: Vec<Vec<u8>>) -> Self {
        Self { elements }
    }

    /// First element decoded as UTF-8 (lossy), for diagnostics only.
    pub fn first_element_text(&self) -> Option<Cow<'_, str>> {
        let first = self.elements.first()?;
        let (text, _) = UTF_8.decode_without_bom_handling(first);
        Some(text)
    }
}

/// One outgoing request as seen by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest<'a> {
    pub session: SessionId,
    pub is_main_frame: bool,
    pub method: &'a str,
    pub url: &'a str,
    pub body: Option<&'a RequestBody>,
}

impl<'a> RouteRequest<'a> {
    /// A `GET` for a sub-frame or sub-resource of `session`.
    pub fn new(session: SessionId, url: &'a str) -> Self {
        Self {
            session,
            is_main_frame: false,
            method: "GET",
            url,
            body: None,
        }
    }

    pub fn main_frame(mut self, is_main_frame: bool) -> Self {
        self.is_main_frame = is_main_frame;
        self
    }

    pub fn method(mut self, method: &'a str) -> Self {
        self.method = method;
        self
    }

    pub fn body(mut self, body: &'a RequestBody) -> Self {
        self.body = Some(body);
        self
    }
}

/// Which rule produced an override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteRule {
    Overlay,
    SocialAuth,
    GameAuth,
    InternalIndex,
    InternalPage,
    InternalPageFailed,
    InternalNotFound,
}

impl RouteRule {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overlay => "overlay",
            Self::SocialAuth => "social_auth",
            Self::GameAuth => "game_auth",
            Self::InternalIndex => "internal_index",
            Self::InternalPage => "internal_page",
            Self::InternalPageFailed => "internal_page_failed",
            Self::InternalNotFound => "internal_not_found",
        }
    }
}

#[derive(Debug, Clone)]
pub enum RouteDecision {
    /// Serve `response` from memory; the host must skip its own fetch.
    Override {
        rule: RouteRule,
        response: SyntheticResponse,
    },
    /// Let the request reach the network unchanged.
    PassThrough,
}

impl RouteDecision {
    pub fn disables_default_handling(&self) -> bool {
        matches!(self, Self::Override { .. })
    }

    pub fn rule(&self) -> Option<RouteRule> {
        match self {
            Self::Override { rule, .. } => Some(*rule),
            Self::PassThrough => None,
        }
    }

    pub fn response(&self) -> Option<&SyntheticResponse> {
        match self {
            Self::Override { response, .. } => Some(response),
            Self::PassThrough => None,
        }
    }

    pub fn into_response(self) -> Option<SyntheticResponse> {
        match self {
            Self::Override { response, .. } => Some(response),
            Self::PassThrough => None,
        }
    }
}

#[derive(Debug)]
pub struct RequestRouter {
    config: RouterConfig,
    pages: VirtualPages,
    registry: Arc<WindowRegistry>,
    moved: ResponseBody,
    not_found: ResponseBody,
    server_error: ResponseBody,
}

impl RequestRouter {
    pub fn new(config: RouterConfig, pages: VirtualPages, registry: Arc<WindowRegistry>) -> Self {
        Self {
            config,
            pages,
            registry,
            moved: ResponseBody::from(MOVED_BODY),
            not_found: ResponseBody::from(NOT_FOUND_BODY),
            server_error: ResponseBody::from(SERVER_ERROR_BODY),
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn pages(&self) -> &VirtualPages {
        &self.pages
    }

    pub fn route(&self, request: &RouteRequest<'_>) -> RouteDecision {
        log_request(request);

        // The overlay's own main-frame load must never be shadowed by rules
        // meant for its content iframe, so the URL is not consulted here.
        if self
            .registry
            .is_overlay_main_frame(request.session, request.is_main_frame)
        {
            let response = SyntheticResponse::new(
                HttpStatusCode::OK,
                MIME_TEXT_HTML,
                Arc::clone(self.config.overlay_document()),
            );
            return decided(request, RouteRule::Overlay, response);
        }

        let base = self.config.internal_url();

        if let Some(callback) = match_social_auth(request.url) {
            let location = format!(
                "{base}oauth.html?code={}&state={}",
                callback.code, callback.state
            );
            match self.redirect(&location) {
                Ok(response) => return decided(request, RouteRule::SocialAuth, response),
                Err(error) => tracing::warn!(url = request.url, %error, "social-auth rewrite rejected"),
            }
        }

        if let Some(fragment) = match_game_auth(request.url) {
            let location = format!("{base}game_auth.html?{fragment}");
            match self.redirect(&location) {
                Ok(response) => return decided(request, RouteRule::GameAuth, response),
                Err(error) => tracing::warn!(url = request.url, %error, "game-auth rewrite rejected"),
            }
        }

        if let Some(path) = internal_path(request.url, base) {
            let (rule, response) = self.internal_page(path);
            return decided(request, rule, response);
        }

        tracing::trace!(url = request.url, "pass-through");
        RouteDecision::PassThrough
    }

    fn internal_page(&self, path: &str) -> (RouteRule, SyntheticResponse) {
        if path.is_empty() {
            return match self.redirect(INDEX_LOCATION) {
                Ok(response) => (RouteRule::InternalIndex, response),
                Err(_) => (RouteRule::InternalPageFailed, self.server_error()),
            };
        }

        let Some(entry) = self.pages.get(path) else {
            return (
                RouteRule::InternalNotFound,
                SyntheticResponse::new(
                    HttpStatusCode::NOT_FOUND,
                    MIME_TEXT_PLAIN,
                    Arc::clone(&self.not_found),
                ),
            );
        };

        match entry.contents() {
            Ok(bytes) => (
                RouteRule::InternalPage,
                SyntheticResponse::new(
                    HttpStatusCode::OK,
                    entry.mime_type().to_owned(),
                    Arc::clone(bytes),
                ),
            ),
            Err(error) => {
                tracing::warn!(page = path, %error, "serving 500 for page that failed to load");
                (RouteRule::InternalPageFailed, self.server_error())
            }
        }
    }

    fn redirect(&self, location: &str) -> BrowserResult<SyntheticResponse> {
        SyntheticResponse::new(HttpStatusCode::FOUND, MIME_TEXT_PLAIN, Arc::clone(&self.moved))
            .with_location(location)
    }

    fn server_error(&self) -> SyntheticResponse {
        SyntheticResponse::new(
            HttpStatusCode::INTERNAL_SERVER_ERROR,
            MIME_TEXT_PLAIN,
            Arc::clone(&self.server_error),
        )
    }
}

fn decided(request: &RouteRequest<'_>, rule: RouteRule, response: SyntheticResponse) -> RouteDecision {
    tracing::debug!(
        session = %request.session,
        url = request.url,
        rule = rule.as_str(),
        status = response.status().as_u16(),
        location = response.location(),
        "request overridden"
    );
    RouteDecision::Override { rule, response }
}

fn log_request(request: &RouteRequest<'_>) {
    match request.body {
        Some(body) => match body.first_element_text() {
            Some(text) => tracing::debug!(
                session = %request.session,
                method = request.method,
                url = request.url,
                body = %text,
                "routing request"
            ),
            None => tracing::debug!(
                session = %request.session,
                method = request.method,
                url = request.url,
                "routing request with empty upload body"
            ),
        },
        None => tracing::debug!(
            session = %request.session,
            method = request.method,
            url = request.url,
            "routing request"
        ),
    }
}
