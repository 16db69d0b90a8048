//! API routes module
//!
//! Defines the HTTP routes nested under `/api`.

pub mod health;
pub mod products;
pub mod seed;
pub mod uploads;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    let router = Router::new()
        .nest("/products", products::router(state))
        .merge(uploads::router(state));

    // Seeding stays off outside development
    if state.config.environment.is_development() {
        router.merge(seed::router(state))
    } else {
        router
    }
}
