use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// External representation of a product.
///
/// This is the JSON shape returned by every endpoint: the identifier is the
/// hex string form of the store's ObjectId and timestamps serialize as
/// RFC 3339.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Hex string form of the MongoDB `_id`
    pub id: String,
    /// Product name
    pub name: String,
    /// Price (no enforced range)
    pub price: f64,
    /// Discount amount, 0.0 when never set
    pub discount: f64,
    /// Product description
    pub description: String,
    /// Category label
    pub category: String,
    /// Image URL or relative path, null when absent
    pub image: Option<String>,
    /// Creation timestamp, assigned once
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful update
    pub updated_at: DateTime<Utc>,
}

/// Product as stored in the `products` collection.
///
/// `discount` is serde-defaulted so records written without the field read
/// back as `0.0` (the default is applied at read time, not write time).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub discount: f64,
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Insert payload: serializes without `_id` so the store assigns the
/// identifier on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProductDocument {
    pub name: String,
    pub price: f64,
    pub discount: f64,
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product.
///
/// No field-level validation beyond type coercion: empty strings and
/// negative numbers are accepted (known gap carried over deliberately).
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProduct {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub discount: f64,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// DTO for partially updating an existing product; absent fields are left
/// untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub discount: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            name: doc.name,
            price: doc.price,
            discount: doc.discount,
            description: doc.description,
            category: doc.category,
            image: doc.image,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}

impl CreateProduct {
    /// Build the insert payload, stamping both timestamps with the same
    /// instant.
    pub fn into_document(self, now: DateTime<Utc>) -> NewProductDocument {
        NewProductDocument {
            name: self.name,
            price: self.price,
            discount: self.discount,
            description: self.description,
            category: self.category,
            image: self.image,
            created_at: now,
            updated_at: now,
        }
    }
}

impl UpdateProduct {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.discount.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.image.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn create_stamps_both_timestamps_with_same_instant() {
        let input = CreateProduct {
            name: "Organic Basmati Rice".to_string(),
            price: 24.99,
            discount: 3.00,
            description: "Premium long-grain rice".to_string(),
            category: "rice".to_string(),
            image: None,
        };

        let now = Utc::now();
        let document = input.into_document(now);

        assert_eq!(document.created_at, now);
        assert_eq!(document.updated_at, now);
        assert_eq!(document.discount, 3.00);
    }

    #[test]
    fn create_payload_defaults_discount_to_zero() {
        let input: CreateProduct = serde_json::from_value(serde_json::json!({
            "name": "Mixed Quinoa Grains",
            "price": 18.50,
            "description": "Tri-color quinoa blend",
            "category": "grains"
        }))
        .unwrap();

        assert_eq!(input.discount, 0.0);
        assert_eq!(input.image, None);
    }

    #[test]
    fn document_missing_discount_reads_back_as_zero() {
        let raw = doc! {
            "_id": ObjectId::new(),
            "name": "Steel Cut Oats",
            "price": 9.75,
            "description": "Wholegrain oats",
            "category": "grains",
            "created_at": bson::DateTime::now(),
            "updated_at": bson::DateTime::now(),
        };

        let document: ProductDocument = bson::from_document(raw).unwrap();
        assert_eq!(document.discount, 0.0);
    }

    #[test]
    fn external_representation_uses_hex_id_and_null_image() {
        let id = ObjectId::new();
        let now = Utc::now();
        let document = ProductDocument {
            id,
            name: "Organic Basmati Rice".to_string(),
            price: 24.99,
            discount: 3.00,
            description: "Premium long-grain rice".to_string(),
            category: "rice".to_string(),
            image: None,
            created_at: now,
            updated_at: now,
        };

        let product: Product = document.into();
        assert_eq!(product.id, id.to_hex());

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], serde_json::json!(id.to_hex()));
        assert_eq!(json["image"], serde_json::Value::Null);
        assert_eq!(json["discount"], serde_json::json!(3.00));
    }

    #[test]
    fn insert_payload_omits_id_and_absent_image() {
        let now = Utc::now();
        let document = CreateProduct {
            name: "Steel Cut Oats".to_string(),
            price: 9.75,
            discount: 0.0,
            description: "Wholegrain oats".to_string(),
            category: "grains".to_string(),
            image: None,
        }
        .into_document(now);

        let raw = bson::to_document(&document).unwrap();
        assert!(!raw.contains_key("_id"));
        assert!(!raw.contains_key("image"));
    }

    #[test]
    fn update_is_empty_tracks_supplied_fields() {
        assert!(UpdateProduct::default().is_empty());
        assert!(
            !UpdateProduct {
                price: Some(12.0),
                ..Default::default()
            }
            .is_empty()
        );
    }
}
