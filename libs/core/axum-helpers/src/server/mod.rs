//! Server infrastructure module.
//!
//! Provides router setup with OpenAPI documentation and a server entry
//! point with graceful shutdown.

pub mod app;
pub mod shutdown;

pub use app::{create_app, create_router};
pub use shutdown::shutdown_signal;
