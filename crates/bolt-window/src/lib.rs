//! Live application windows and the registry that owns them.

pub mod details;
pub mod registry;
pub mod window;

pub use details::WindowDetails;
pub use registry::WindowRegistry;
pub use window::Window;
pub use window::WindowBackend;
pub use window::WindowId;
pub use window::WindowSnapshot;
