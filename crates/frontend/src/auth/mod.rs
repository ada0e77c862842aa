//! Authentication module

pub mod context;
pub mod guard;

// Re-export commonly used items
pub use context::{AuthAction, AuthProvider, use_auth};
pub use guard::RouteGuard;
