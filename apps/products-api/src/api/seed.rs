//! Development-only sample data seeding.
//!
//! Mounted only when the app runs in the development environment. Seeding is
//! a one-shot operation: it refuses to insert when any product already
//! exists.

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use domain_products::{
    CreateProduct, MessageResponse, MongoProductRepository, ProductError, ProductService,
    SeedOutcome,
};
use utoipa::OpenApi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(seed_data),
    tags(
        (name = "Seed", description = "Development-only data seeding")
    )
)]
pub struct ApiDoc;

/// Sample catalog inserted by the seed endpoint.
pub fn sample_products() -> Vec<CreateProduct> {
    vec![
        CreateProduct {
            name: "Organic Basmati Rice".to_string(),
            price: 24.99,
            discount: 3.00,
            description: "Premium quality long-grain basmati rice, aged to perfection."
                .to_string(),
            category: "rice".to_string(),
            image: Some(
                "https://images.pexels.com/photos/4110098/pexels-photo-4110098.jpeg".to_string(),
            ),
        },
        CreateProduct {
            name: "Mixed Quinoa Grains".to_string(),
            price: 18.50,
            discount: 2.50,
            description: "Nutritious tri-color quinoa blend featuring white, red, and black varieties."
                .to_string(),
            category: "grains".to_string(),
            image: Some(
                "https://images.pexels.com/photos/7262354/pexels-photo-7262354.jpeg".to_string(),
            ),
        },
    ]
}

/// Create the seed router, mounted under `/api`
pub fn router(state: &AppState) -> Router {
    let repository = MongoProductRepository::new(state.db.clone());
    let service = ProductService::new(repository);

    Router::new()
        .route("/seed-data", post(seed_data))
        .with_state(Arc::new(service))
}

/// Seed sample products (development only)
#[utoipa::path(
    post,
    path = "/seed-data",
    tag = "Seed",
    responses(
        (status = 200, description = "Seed outcome message", body = MessageResponse),
        (status = 500, description = "Store failure")
    )
)]
async fn seed_data(
    State(service): State<Arc<ProductService<MongoProductRepository>>>,
) -> Result<Json<MessageResponse>, ProductError> {
    let message = match service.seed_products(sample_products()).await? {
        SeedOutcome::Seeded(count) => format!("Seeded {} sample products", count),
        SeedOutcome::AlreadySeeded => "Data already seeded".to_string(),
    };

    Ok(Json(MessageResponse { message }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_covers_both_categories() {
        let samples = sample_products();

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].category, "rice");
        assert_eq!(samples[1].category, "grains");
        assert!(samples.iter().all(|p| p.image.is_some()));
        assert!(samples.iter().all(|p| p.price > 0.0 && p.discount > 0.0));
    }
}
