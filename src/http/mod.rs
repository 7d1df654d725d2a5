//! HTTP REST adapter
//!
//! Depends only on core/. Never imports from cli/.
//!
//! Provides the browser-facing lookup endpoints via the Axum web
//! framework.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::*;
pub use router::{build_router, cors_layer};
