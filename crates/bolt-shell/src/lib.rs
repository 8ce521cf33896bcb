//! Browser-process side of the Bolt shell.
//!
//! [`Shell`] is the one component the host engine talks to: it opens the
//! first window when the context is ready, routes every request, tracks
//! session attachment and drives the two-phase close protocol.

pub mod config;
pub mod host;
mod shell;


pub use config::ShellConfig;
pub use host::HostHandle;
pub use host::WindowFactory;
pub use shell::Shell;
pub use shell::ShellSummary;

pub use bolt_core::BrowserError;
pub use bolt_core::BrowserResult;
pub use bolt_core::SessionId;
pub use bolt_router::RequestBody;
pub use bolt_router::RouteDecision;
pub use bolt_router::RouteRequest;
pub use bolt_router::RouteRule;
pub use bolt_window::WindowBackend;
pub use bolt_window::WindowDetails;
pub use bolt_window::WindowId;
