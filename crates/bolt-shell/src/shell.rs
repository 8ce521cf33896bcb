use crate::config::ShellConfig;
use crate::host::WindowFactory;
use bolt_core::BrowserResult;
use bolt_core::SessionId;
use bolt_ipc::AppMessage;
use bolt_ipc::InboundMessage;
use bolt_router::RequestRouter;
use bolt_router::RouteDecision;
use bolt_router::RouteRequest;
use bolt_router::VirtualPages;
use bolt_window::Window;
use bolt_window::WindowId;
use bolt_window::WindowRegistry;
use std::sync::Arc;

#[derive(Debug)]
pub struct Shell {
    config: ShellConfig,
    registry: Arc<WindowRegistry>,
    router: RequestRouter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellSummary {
    pub live_windows: usize,
    pub pages_loaded: usize,
    pub pages_failed: usize,
}

impl Shell {
    /// Validates the configuration and reads the virtual pages from `files_root`.
    pub fn new(config: ShellConfig) -> BrowserResult<Self> {
        let pages = VirtualPages::load(&config.files_root, &config.pages);
        Self::with_pages(config, pages)
    }

    pub fn with_pages(config: ShellConfig, pages: VirtualPages) -> BrowserResult<Self> {
        let router_config = config.router_config()?;
        let registry = Arc::new(WindowRegistry::new());
        let router = RequestRouter::new(router_config, pages, Arc::clone(&registry));

        let shell = Self {
            config,
            registry,
            router,
        };
        let summary = shell.summary();
        tracing::info!(
            internal_url = %shell.config.internal_url,
            pages_loaded = summary.pages_loaded,
            pages_failed = summary.pages_failed,
            "shell ready"
        );
        Ok(shell)
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<WindowRegistry> {
        &self.registry
    }

    pub fn router(&self) -> &RequestRouter {
        &self.router
    }

    /// Opens the first application window once the host context is ready.
    ///
    /// The host call happens before the registry lock is taken; the window is
    /// registered only after the host accepted it.
    pub fn on_context_initialized(&self, factory: &dyn WindowFactory) -> BrowserResult<WindowId> {
        let details = self.config.initial_window;
        let backend = factory.open_window(&details, &self.config.internal_url)?;

        let mut window = Window::new(details, backend);
        if self.config.show_settings_on_start {
            window.show_settings();
        }
        Ok(self.registry.register(window))
    }

    pub fn decide_response(&self, request: &RouteRequest<'_>) -> RouteDecision {
        self.router.route(request)
    }

    /// Binds a newly created browser session to the window waiting for it.
    pub fn on_session_created(&self, session: SessionId) -> Option<WindowId> {
        match self.registry.attach_pending(session) {
            Ok(window) => Some(window),
            Err(error) => {
                tracing::warn!(session = %session, error = %error, "session left unattached");
                None
            }
        }
    }

    pub fn on_may_close(&self, session: SessionId) -> bool {
        self.registry.request_close(session)
    }

    pub fn on_closed(&self, session: SessionId) -> bool {
        self.registry.finalize_close(session)
    }

    /// Handles a message sent from a page. Returns false for names the shell
    /// does not own so the host can pass them on.
    pub fn on_message(&self, session: SessionId, name: &str, payload: Option<&[u8]>) -> bool {
        let inbound = InboundMessage::new(session, name, payload);
        let Some(message) = inbound.resolve() else {
            tracing::trace!(session = %session, name, "message not handled");
            return false;
        };

        let matched = match message {
            AppMessage::Closed => self.registry.broadcast(
                |window| window.belongs_to(session),
                |window| window.close_browser(),
            ),
            AppMessage::Settings => self.registry.broadcast(
                |window| window.belongs_to(session),
                |window| window.show_settings(),
            ),
            // Acknowledged so the page does not retry; the host owns these gestures.
            AppMessage::Minify | AppMessage::BeginDrag => 0,
        };

        tracing::debug!(
            session = %session,
            message = message.as_str(),
            payload_len = inbound.payload_len(),
            windows = matched,
            "app message"
        );
        true
    }

    pub fn summary(&self) -> ShellSummary {
        let pages = self.router.pages();
        let pages_failed = pages.failed_pages().count();
        ShellSummary {
            live_windows: self.registry.len(),
            pages_loaded: pages.len() - pages_failed,
            pages_failed,
        }
    }
}
