//! Product Service - Business logic layer

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Outcome of a seed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Inserted this many sample records into an empty collection
    Seeded(u64),
    /// Records already exist, nothing was inserted
    AlreadySeeded,
}

/// Product service orchestrating repository operations.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product and return the persisted record
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        self.repository.insert(input).await
    }

    /// List every product in the store's natural order
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    /// Get a product by id
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ObjectId) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Apply a partial update and return the refreshed record
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: ObjectId, input: UpdateProduct) -> ProductResult<Product> {
        self.repository.update(id, input).await
    }

    /// Hard-delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ObjectId) -> ProductResult<()> {
        self.repository.delete(id).await
    }

    /// Count all products
    #[instrument(skip(self))]
    pub async fn count_products(&self) -> ProductResult<u64> {
        self.repository.count().await
    }

    /// Insert sample data once: a no-op whenever any record already exists.
    #[instrument(skip(self, samples))]
    pub async fn seed_products(&self, samples: Vec<CreateProduct>) -> ProductResult<SeedOutcome> {
        if self.repository.count().await? > 0 {
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let inserted = self.repository.insert_many(samples).await?;
        Ok(SeedOutcome::Seeded(inserted))
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use chrono::Utc;

    fn sample_product(id: ObjectId) -> Product {
        let now = Utc::now();
        Product {
            id: id.to_hex(),
            name: "Organic Basmati Rice".to_string(),
            price: 24.99,
            discount: 3.00,
            description: "Premium long-grain rice".to_string(),
            category: "rice".to_string(),
            image: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn get_product_returns_not_found_when_no_match() {
        let id = ObjectId::new();
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = ProductService::new(repo);
        let err = service.get_product(id).await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(e) if e == id));
    }

    #[tokio::test]
    async fn get_product_returns_record_when_found() {
        let id = ObjectId::new();
        let expected = sample_product(id);
        let returned = expected.clone();

        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(returned.clone())));

        let service = ProductService::new(repo);
        let product = service.get_product(id).await.unwrap();

        assert_eq!(product, expected);
    }

    #[tokio::test]
    async fn delete_propagates_not_found_each_time() {
        let id = ObjectId::new();
        let mut repo = MockProductRepository::new();
        repo.expect_delete()
            .times(2)
            .returning(|id| Err(ProductError::NotFound(id)));

        let service = ProductService::new(repo);

        // Deleting an absent product must fail every time, not succeed
        // idempotently
        assert!(service.delete_product(id).await.is_err());
        assert!(service.delete_product(id).await.is_err());
    }

    #[tokio::test]
    async fn seed_skips_when_records_exist() {
        let mut repo = MockProductRepository::new();
        repo.expect_count().returning(|| Ok(5));
        repo.expect_insert_many().never();

        let service = ProductService::new(repo);
        let outcome = service.seed_products(vec![]).await.unwrap();

        assert_eq!(outcome, SeedOutcome::AlreadySeeded);
    }

    #[tokio::test]
    async fn seed_inserts_into_empty_collection() {
        let mut repo = MockProductRepository::new();
        repo.expect_count().returning(|| Ok(0));
        repo.expect_insert_many().returning(|inputs| Ok(inputs.len() as u64));

        let service = ProductService::new(repo);
        let samples = vec![
            CreateProduct {
                name: "Organic Basmati Rice".to_string(),
                price: 24.99,
                discount: 3.00,
                description: "Premium long-grain rice".to_string(),
                category: "rice".to_string(),
                image: None,
            },
            CreateProduct {
                name: "Mixed Quinoa Grains".to_string(),
                price: 18.50,
                discount: 2.50,
                description: "Tri-color quinoa blend".to_string(),
                category: "grains".to_string(),
                image: None,
            },
        ];

        let outcome = service.seed_products(samples).await.unwrap();
        assert_eq!(outcome, SeedOutcome::Seeded(2));
    }
}
