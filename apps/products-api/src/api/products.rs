//! Products API wiring.
//!
//! Connects the MongoDB-backed repository to the domain handlers.

use axum::Router;
use domain_products::{MongoProductRepository, ProductService, handlers};

use crate::state::AppState;

/// Create the products router backed by the app's MongoDB database
pub fn router(state: &AppState) -> Router {
    let repository = MongoProductRepository::new(state.db.clone());
    let service = ProductService::new(repository);

    handlers::router(service)
}
