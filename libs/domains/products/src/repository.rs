use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence.
///
/// Defines the data access interface for products; implementations can use
/// different storage backends, and tests substitute a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product, stamping both timestamps, and return the
    /// persisted record as re-read from the store.
    async fn insert(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Fetch every product in the store's natural order.
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// Fetch a product by id, `None` when no record matches.
    async fn find_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>>;

    /// Apply a partial update (supplied fields plus a refreshed
    /// `updated_at`) and return the record as re-read after the update.
    /// Fails with `NotFound` when the id matches no record.
    async fn update(&self, id: ObjectId, input: UpdateProduct) -> ProductResult<Product>;

    /// Hard-delete a product; fails with `NotFound` when nothing was
    /// deleted.
    async fn delete(&self, id: ObjectId) -> ProductResult<()>;

    /// Count all product records.
    async fn count(&self) -> ProductResult<u64>;

    /// Bulk-insert products (used by dev seeding); returns the number
    /// inserted.
    async fn insert_many(&self, inputs: Vec<CreateProduct>) -> ProductResult<u64>;
}
