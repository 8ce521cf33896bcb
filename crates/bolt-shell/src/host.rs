//! Boundary types for the host engine.

use bolt_core::BrowserResult;
use bolt_window::WindowBackend;
use bolt_window::WindowDetails;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

/// Creates on-screen windows on behalf of the shell.
pub trait WindowFactory {
    /// Opens a top-level window loading `url`. The browser session is created
    /// asynchronously and reported back through `Shell::on_session_created`.
    fn open_window(
        &self,
        details: &WindowDetails,
        url: &str,
    ) -> BrowserResult<Box<dyn WindowBackend>>;
}

/// Manual reference count over a shared value, for hosts that expect
/// add-ref/release semantics on every object they are handed.
///
/// The handle starts with one reference. When the last reference is released
/// the inner `Arc` is dropped; further access yields `None`.
#[derive(Debug)]
pub struct HostHandle<T> {
    state: Mutex<HandleState<T>>,
}

#[derive(Debug)]
struct HandleState<T> {
    refs: usize,
    value: Option<Arc<T>>,
}

impl<T> HostHandle<T> {
    pub fn new(value: Arc<T>) -> Self {
        Self {
            state: Mutex::new(HandleState {
                refs: 1,
                value: Some(value),
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, HandleState<T>> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Adds a reference. Returns false once the value has already been released.
    pub fn add_ref(&self) -> bool {
        let mut state = self.state();
        if state.value.is_none() {
            return false;
        }
        state.refs += 1;
        true
    }

    /// Drops a reference; returns true when this released the last one.
    pub fn release(&self) -> bool {
        let mut state = self.state();
        if state.refs == 0 {
            return false;
        }

        state.refs -= 1;
        if state.refs == 0 {
            state.value = None;
            return true;
        }
        false
    }

    pub fn has_one_ref(&self) -> bool {
        self.state().refs == 1
    }

    pub fn has_at_least_one_ref(&self) -> bool {
        self.state().refs >= 1
    }

    pub fn get(&self) -> Option<Arc<T>> {
        self.state().value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::HostHandle;
    use std::sync::Arc;

    #[test]
    fn value_lives_until_last_release() {
        let value = Arc::new(String::from("client"));
        let handle = HostHandle::new(Arc::clone(&value));
        assert!(handle.has_one_ref());

        assert!(handle.add_ref());
        assert!(!handle.has_one_ref());
        assert!(handle.has_at_least_one_ref());

        assert!(!handle.release());
        assert_eq!(handle.get().as_deref().map(String::as_str), Some("client"));
        assert_eq!(Arc::strong_count(&value), 2);

        assert!(handle.release());
        assert!(handle.get().is_none());
        assert!(!handle.has_at_least_one_ref());
        assert_eq!(Arc::strong_count(&value), 1);
    }

    #[test]
    fn released_handle_rejects_new_refs() {
        let handle = HostHandle::new(Arc::new(5_u32));
        assert!(handle.release());
        assert!(!handle.add_ref());
        assert!(!handle.release());
        assert!(!handle.has_one_ref());
    }
}
