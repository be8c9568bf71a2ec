//! API route handlers, grouped by concern
//!
//! - [`directors`] — Director lookup
//! - [`system`] — Health and OpenAPI

mod directors;
mod system;

// Re-export all handlers so `routes::function_name` works
pub use directors::*;
pub use system::*;
