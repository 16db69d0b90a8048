//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::{
    Collection, Database,
    bson::{self, doc, oid::ObjectId},
};
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, NewProductDocument, Product, ProductDocument, UpdateProduct};
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<ProductDocument>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository over the `products` collection
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("organic_products");
    /// let repo = MongoProductRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<ProductDocument>("products");
        Self { collection }
    }

    /// Create a repository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<ProductDocument>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<ProductDocument> {
        &self.collection
    }

    /// Build the `$set` document for a partial update.
    ///
    /// Only supplied fields are included; `updated_at` is always refreshed,
    /// so an otherwise-empty update still touches the record.
    fn build_update_document(input: UpdateProduct, now: DateTime<Utc>) -> bson::Document {
        let mut set = doc! {};

        if let Some(name) = input.name {
            set.insert("name", name);
        }
        if let Some(price) = input.price {
            set.insert("price", price);
        }
        if let Some(discount) = input.discount {
            set.insert("discount", discount);
        }
        if let Some(description) = input.description {
            set.insert("description", description);
        }
        if let Some(category) = input.category {
            set.insert("category", category);
        }
        if let Some(image) = input.image {
            set.insert("image", image);
        }

        set.insert("updated_at", bson::DateTime::from_chrono(now));
        set
    }

    /// Typed view of the collection for documents without an `_id`, so the
    /// store assigns identifiers on insert.
    fn insert_collection(&self) -> Collection<NewProductDocument> {
        self.collection.clone_with_type::<NewProductDocument>()
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn insert(&self, input: CreateProduct) -> ProductResult<Product> {
        let document = input.into_document(Utc::now());

        let result = self.insert_collection().insert_one(&document).await?;
        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            ProductError::Internal("store returned a non-ObjectId inserted id".to_string())
        })?;

        // Re-read so the response reflects exactly what was persisted
        let persisted = self
            .collection
            .find_one(doc! { "_id": id })
            .await?
            .ok_or_else(|| {
                ProductError::Internal(format!("inserted product {} missing on re-read", id))
            })?;

        tracing::info!(product_id = %id, "Product created successfully");
        Ok(persisted.into())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        use futures_util::TryStreamExt;

        // Natural store order, no sort
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<ProductDocument> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>> {
        let document = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(document.map(Into::into))
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: ObjectId, input: UpdateProduct) -> ProductResult<Product> {
        let set = Self::build_update_document(input, Utc::now());

        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": set })
            .await?;

        if result.matched_count == 0 {
            return Err(ProductError::NotFound(id));
        }

        let updated = self
            .collection
            .find_one(doc! { "_id": id })
            .await?
            .ok_or(ProductError::NotFound(id))?;

        tracing::info!(product_id = %id, "Product updated successfully");
        Ok(updated.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> ProductResult<()> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count == 0 {
            return Err(ProductError::NotFound(id));
        }

        tracing::info!(product_id = %id, "Product deleted successfully");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> ProductResult<u64> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }

    #[instrument(skip(self, inputs), fields(count = inputs.len()))]
    async fn insert_many(&self, inputs: Vec<CreateProduct>) -> ProductResult<u64> {
        if inputs.is_empty() {
            return Ok(0);
        }

        let now = Utc::now();
        let documents: Vec<NewProductDocument> = inputs
            .into_iter()
            .map(|input| input.into_document(now))
            .collect();

        let result = self.insert_collection().insert_many(&documents).await?;

        tracing::info!(inserted = result.inserted_ids.len(), "Products seeded");
        Ok(result.inserted_ids.len() as u64)
    }
}
