//! Thread-safe set of live windows with the two-phase close protocol.
//!
//! Every operation takes the single registry lock for its own duration and
//! releases it before returning. The raw collection is never handed out, so
//! check-then-act sequences (find a window, then mutate it) are atomic.

use crate::window::Window;
use crate::window::WindowId;
use crate::window::WindowSnapshot;
use bolt_core::BrowserError;
use bolt_core::BrowserResult;
use bolt_core::SessionId;
use std::sync::Mutex;
use std::sync::MutexGuard;

#[derive(Debug, Default)]
pub struct WindowRegistry {
    windows: Mutex<Vec<Window>>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn windows(&self) -> MutexGuard<'_, Vec<Window>> {
        match self.windows.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Adds a freshly created window. It is visible to lookups as soon as this returns.
    pub fn register(&self, window: Window) -> WindowId {
        let id = window.id();
        let mut windows = self.windows();
        windows.push(window);
        tracing::debug!(window = %id, live = windows.len(), "window registered");
        id
    }

    pub fn len(&self) -> usize {
        self.windows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows().is_empty()
    }

    pub fn snapshots(&self) -> Vec<WindowSnapshot> {
        self.windows().iter().map(Window::snapshot).collect()
    }

    /// Returns the window owning `session`, including one that is mid-close.
    pub fn find_by_session(&self, session: SessionId) -> Option<WindowSnapshot> {
        self.windows()
            .iter()
            .find(|window| window.belongs_to(session))
            .map(Window::snapshot)
    }

    /// True when `session` belongs to a window showing its overlay content
    /// frame and the request targets that session's main frame.
    pub fn is_overlay_main_frame(&self, session: SessionId, is_main_frame: bool) -> bool {
        if !is_main_frame {
            return false;
        }

        self.windows()
            .iter()
            .any(|window| window.has_content_frame() && window.belongs_to(session))
    }

    /// Binds `session` to a specific window.
    pub fn attach_session(&self, window: WindowId, session: SessionId) -> BrowserResult<()> {
        let mut windows = self.windows();
        ensure_unclaimed(&windows, session)?;

        let target = windows
            .iter_mut()
            .find(|candidate| candidate.id() == window)
            .ok_or_else(|| {
                BrowserError::new(
                    "window.unknown_window",
                    format!("no live window with id {window}"),
                )
            })?;
        target.attach_session(session)?;
        tracing::debug!(window = %window, session = %session, "session attached");
        Ok(())
    }

    /// Binds `session` to the oldest window still waiting for one.
    pub fn attach_pending(&self, session: SessionId) -> BrowserResult<WindowId> {
        let mut windows = self.windows();
        ensure_unclaimed(&windows, session)?;

        let target = windows
            .iter_mut()
            .find(|candidate| candidate.session().is_none())
            .ok_or_else(|| {
                BrowserError::new(
                    "window.no_pending_window",
                    format!("no window is waiting for a session (got {session})"),
                )
            })?;
        target.attach_session(session)?;
        let id = target.id();
        tracing::debug!(window = %id, session = %session, "session attached to pending window");
        Ok(id)
    }

    pub fn set_content_frame(&self, session: SessionId, present: bool) -> bool {
        self.broadcast(
            |window| window.belongs_to(session),
            |window| window.set_content_frame(present),
        ) > 0
    }

    /// Close phase one. Marks the window closing and starts the in-page
    /// shutdown; repeated calls before finalisation report the window again
    /// without re-notifying it. Returns whether a window was found.
    pub fn request_close(&self, session: SessionId) -> bool {
        let mut windows = self.windows();
        let Some(window) = windows.iter_mut().find(|window| window.belongs_to(session)) else {
            tracing::debug!(session = %session, "close requested for unknown session");
            return false;
        };

        if !window.is_closing() {
            window.request_close();
            tracing::info!(window = %window.id(), session = %session, "window closing");
        }
        true
    }

    /// Close phase two. Removes the window that is closing for `session`.
    /// A window that never went through phase one is left in place.
    pub fn finalize_close(&self, session: SessionId) -> bool {
        let mut windows = self.windows();
        let Some(index) = windows
            .iter()
            .position(|window| window.is_closing_with_handle(session))
        else {
            tracing::debug!(session = %session, "finalize for session without closing window");
            return false;
        };

        let removed = windows.remove(index);
        tracing::info!(
            window = %removed.id(),
            session = %session,
            live = windows.len(),
            "window removed"
        );
        true
    }

    /// Applies `action` to every window matching `predicate`; returns how many matched.
    pub fn broadcast<P, A>(&self, predicate: P, mut action: A) -> usize
    where
        P: Fn(&Window) -> bool,
        A: FnMut(&mut Window),
    {
        let mut windows = self.windows();
        let mut matched = 0;
        for window in windows.iter_mut().filter(|window| predicate(window)) {
            action(window);
            matched += 1;
        }
        matched
    }
}

fn ensure_unclaimed(windows: &[Window], session: SessionId) -> BrowserResult<()> {
    match windows.iter().find(|window| window.belongs_to(session)) {
        Some(owner) => Err(BrowserError::new(
            "window.session_already_claimed",
            format!("session {session} already belongs to window {}", owner.id()),
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::WindowRegistry;
    use crate::details::WindowDetails;
    use crate::window::Window;
    use crate::window::tests::RecordingBackend;
    use bolt_core::SessionId;
    use std::sync::Arc;
    use std::thread;

    fn overlay_window(backend: &RecordingBackend) -> Window {
        Window::new(WindowDetails::default(), Box::new(backend.clone()))
    }

    fn registry_with_session(raw: i32) -> (WindowRegistry, RecordingBackend) {
        let registry = WindowRegistry::new();
        let backend = RecordingBackend::default();
        let id = registry.register(overlay_window(&backend));
        assert!(registry.attach_session(id, SessionId::new(raw)).is_ok());
        (registry, backend)
    }

    #[test]
    fn registered_window_is_found_after_attach() {
        let registry = WindowRegistry::new();
        let id = registry.register(overlay_window(&RecordingBackend::default()));
        assert!(registry.find_by_session(SessionId::new(5)).is_none());

        assert!(registry.attach_session(id, SessionId::new(5)).is_ok());
        let found = registry.find_by_session(SessionId::new(5));
        assert_eq!(found.map(|snapshot| snapshot.id), Some(id));
    }

    #[test]
    fn pending_attach_uses_oldest_unbound_window() {
        let registry = WindowRegistry::new();
        let first = registry.register(overlay_window(&RecordingBackend::default()));
        let second = registry.register(overlay_window(&RecordingBackend::default()));

        assert_eq!(registry.attach_pending(SessionId::new(1)), Ok(first));
        assert_eq!(registry.attach_pending(SessionId::new(2)), Ok(second));

        let third = registry.attach_pending(SessionId::new(3));
        assert!(third.is_err());
        if let Err(error) = third {
            assert_eq!(error.code, "window.no_pending_window");
        }
    }

    #[test]
    fn a_session_is_claimed_by_one_window_only() {
        let (registry, _) = registry_with_session(8);
        let other = registry.register(overlay_window(&RecordingBackend::default()));

        let duplicate = registry.attach_session(other, SessionId::new(8));
        assert!(duplicate.is_err());
        if let Err(error) = duplicate {
            assert_eq!(error.code, "window.session_already_claimed");
        }
    }

    #[test]
    fn overlay_detection_requires_main_frame_and_content_frame() {
        let (registry, _) = registry_with_session(4);
        assert!(registry.is_overlay_main_frame(SessionId::new(4), true));
        assert!(!registry.is_overlay_main_frame(SessionId::new(4), false));
        assert!(!registry.is_overlay_main_frame(SessionId::new(5), true));

        assert!(registry.set_content_frame(SessionId::new(4), false));
        assert!(!registry.is_overlay_main_frame(SessionId::new(4), true));
    }

    #[test]
    fn close_for_unknown_session_is_a_noop() {
        let (registry, backend) = registry_with_session(1);
        assert!(!registry.request_close(SessionId::new(2)));
        assert!(!registry.finalize_close(SessionId::new(2)));
        assert_eq!(registry.len(), 1);
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn window_stays_visible_between_close_phases() {
        let (registry, backend) = registry_with_session(6);
        let session = SessionId::new(6);

        assert!(registry.request_close(session));
        let found = registry.find_by_session(session);
        assert!(found.is_some_and(|snapshot| snapshot.closing));
        assert!(registry.is_overlay_main_frame(session, true));

        assert!(registry.request_close(session));
        assert_eq!(backend.calls(), vec!["begin_app_shutdown"]);

        assert!(registry.finalize_close(session));
        assert!(registry.find_by_session(session).is_none());
        assert!(registry.is_empty());

        assert!(!registry.request_close(session));
        assert!(!registry.finalize_close(session));
    }

    #[test]
    fn finalize_without_request_keeps_window() {
        let (registry, _) = registry_with_session(7);
        assert!(!registry.finalize_close(SessionId::new(7)));
        assert!(registry.find_by_session(SessionId::new(7)).is_some());
    }

    #[test]
    fn finalize_removes_only_matching_window() {
        let registry = WindowRegistry::new();
        for raw in 1..=3 {
            let id = registry.register(overlay_window(&RecordingBackend::default()));
            assert!(registry.attach_session(id, SessionId::new(raw)).is_ok());
        }

        assert!(registry.request_close(SessionId::new(2)));
        assert!(registry.finalize_close(SessionId::new(2)));

        let sessions: Vec<_> = registry
            .snapshots()
            .into_iter()
            .filter_map(|snapshot| snapshot.session)
            .collect();
        assert_eq!(sessions, vec![SessionId::new(1), SessionId::new(3)]);
    }

    #[test]
    fn broadcast_counts_matching_windows() {
        let (registry, backend) = registry_with_session(2);
        let matched = registry.broadcast(
            |window| window.belongs_to(SessionId::new(2)),
            |window| window.show_settings(),
        );
        assert_eq!(matched, 1);
        assert_eq!(backend.calls(), vec!["show_settings"]);

        let matched = registry.broadcast(|window| window.is_closing(), |window| window.close_browser());
        assert_eq!(matched, 0);
    }

    #[test]
    fn concurrent_lifecycles_leave_registry_empty() {
        let registry = Arc::new(WindowRegistry::new());
        let mut handles = Vec::new();

        for raw in 0..16 {
            let registry = Arc::clone(&registry);
            handles.push(thread::spawn(move || {
                let session = SessionId::new(raw);
                let id = registry.register(Window::new(
                    WindowDetails::default(),
                    Box::new(RecordingBackend::default()),
                ));
                assert!(registry.attach_session(id, session).is_ok());
                assert!(registry.find_by_session(session).is_some());
                assert!(registry.request_close(session));
                assert!(registry.find_by_session(session).is_some());
                assert!(registry.finalize_close(session));
                assert!(registry.find_by_session(session).is_none());
            }));
        }

        for handle in handles {
            assert!(handle.join().is_ok());
        }
        assert!(registry.is_empty());
    }
}
