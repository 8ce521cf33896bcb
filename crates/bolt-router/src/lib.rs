//! Request interception: overlay documents, OAuth callback rewrites and the
//! internal virtual filesystem.

pub mod config;
pub mod overlay;
pub mod pages;
pub mod router;
mod rules;

pub use config::RouterConfig;
pub use pages::PageEntry;
pub use pages::PageSpec;
pub use pages::VirtualPages;
pub use router::RequestBody;
pub use router::RequestRouter;
pub use router::RouteDecision;
pub use router::RouteRequest;
pub use router::RouteRule;
