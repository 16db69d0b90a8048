//! # Axum Helpers
//!
//! Utilities, middleware, and helpers for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured JSON error responses
//! - **[`extractors`]**: Custom extractors (ObjectId path parameters)
//! - **[`http`]**: HTTP middleware (CORS)
//! - **[`server`]**: Router setup with OpenAPI docs, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export extractors
pub use extractors::ObjectIdPath;

// Re-export HTTP middleware
pub use http::create_cors_layer;

// Re-export server helpers
pub use server::{create_app, create_router, shutdown_signal};
