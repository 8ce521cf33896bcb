//! A single top-level application window.

use crate::details::WindowDetails;
use bolt_core::BrowserError;
use bolt_core::BrowserResult;
use bolt_core::SessionId;
use core::fmt;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

static NEXT_WINDOW_ID: AtomicU64 = AtomicU64::new(1);

/// Host-side handle for the on-screen window and its browser.
///
/// Methods are invoked while the registry lock is held, so implementations
/// must only post work to the host and return; they must not block or call
/// back into the registry.
pub trait WindowBackend: Send {
    /// Lets the content frame run its application-level shutdown sequence.
    fn begin_app_shutdown(&mut self);
    /// Closes the underlying browser session.
    fn close_browser(&mut self);
    /// Brings up the settings panel for this window.
    fn show_settings(&mut self);
}

/// Process-local window identifier, assigned before any session exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(u64);

impl WindowId {
    fn next() -> Self {
        Self(NEXT_WINDOW_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Copy of a window's observable state, safe to hold after the lock is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSnapshot {
    pub id: WindowId,
    pub session: Option<SessionId>,
    pub has_content_frame: bool,
    pub closing: bool,
    pub details: WindowDetails,
}

pub struct Window {
    id: WindowId,
    details: WindowDetails,
    session: Option<SessionId>,
    has_content_frame: bool,
    closing: bool,
    backend: Box<dyn WindowBackend>,
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("id", &self.id)
            .field("session", &self.session)
            .field("has_content_frame", &self.has_content_frame)
            .field("closing", &self.closing)
            .finish_non_exhaustive()
    }
}

impl Window {
    pub fn new(details: WindowDetails, backend: Box<dyn WindowBackend>) -> Self {
        Self {
            id: WindowId::next(),
            details,
            session: None,
            has_content_frame: false,
            closing: false,
            backend,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn details(&self) -> &WindowDetails {
        &self.details
    }

    pub fn session(&self) -> Option<SessionId> {
        self.session
    }

    pub fn has_content_frame(&self) -> bool {
        self.has_content_frame
    }

    pub fn is_closing(&self) -> bool {
        self.closing
    }

    pub fn belongs_to(&self, session: SessionId) -> bool {
        self.session == Some(session)
    }

    pub fn is_closing_with_handle(&self, session: SessionId) -> bool {
        self.closing && self.belongs_to(session)
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot {
            id: self.id,
            session: self.session,
            has_content_frame: self.has_content_frame,
            closing: self.closing,
            details: self.details,
        }
    }

    /// Binds the browser session. An identity is set once and never replaced.
    ///
    /// Overlay windows gain their content frame together with the session.
    pub fn attach_session(&mut self, session: SessionId) -> BrowserResult<()> {
        if let Some(existing) = self.session {
            return Err(BrowserError::new(
                "window.session_already_attached",
                format!(
                    "window {} already belongs to session {existing}, refusing {session}",
                    self.id
                ),
            ));
        }

        self.session = Some(session);
        if self.details.controls_overlay {
            self.has_content_frame = true;
        }
        Ok(())
    }

    pub fn set_content_frame(&mut self, present: bool) {
        self.has_content_frame = present;
    }

    /// First close phase: mark closing and start the in-page shutdown.
    pub fn request_close(&mut self) {
        self.closing = true;
        self.backend.begin_app_shutdown();
    }

    pub fn close_browser(&mut self) {
        self.backend.close_browser();
    }

    pub fn show_settings(&mut self) {
        self.backend.show_settings();
    }
}
