//! Core data models for the storefront
//!
//! This module contains the data types used throughout the application
//! for representing products, ratings, and the fetched catalog snapshot.

pub mod catalog;

pub use catalog::{CatalogClient, CatalogError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product record from the upstream catalog API.
///
/// Field names match the Fake Store API JSON exactly, so the same shape
/// serves both the wire format and the persisted cart slot. Products are
/// immutable once fetched; the cart stores copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    pub id: u64,
    /// Product title
    pub title: String,
    /// Price in dollars
    pub price: f64,
    /// Category name (e.g. "electronics")
    pub category: String,
    /// URL of the product image
    pub image: String,
    /// Long-form description
    pub description: String,
    /// Aggregate customer rating
    pub rating: Rating,
}

/// Aggregate rating attached to a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score, 0.0 to 5.0
    pub rate: f64,
    /// Number of reviews the average is based on
    pub count: u64,
}

/// Snapshot of the last successful full catalog fetch.
///
/// This is the only in-memory cache the application keeps: the complete
/// product list, the category names, and when they were fetched. Category
/// filters and product lookups by id resolve against this snapshot.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// All products from the last full fetch
    pub products: Vec<Product>,
    /// Category names from the categories endpoint
    pub categories: Vec<String>,
    /// When the snapshot was taken
    pub fetched_at: Option<DateTime<Utc>>,
}

impl Catalog {
    /// Builds a snapshot from freshly fetched products and categories
    pub fn new(products: Vec<Product>, categories: Vec<String>) -> Self {
        Self {
            products,
            categories,
            fetched_at: Some(Utc::now()),
        }
    }

    /// Looks up a product in the snapshot by its identifier
    pub fn product_by_id(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Returns the products belonging to the given category
    pub fn products_in_category(&self, category: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product(id: u64, category: &str) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price: 9.99,
            category: category.to_string(),
            image: "https://example.com/img.jpg".to_string(),
            description: "A sample product".to_string(),
            rating: Rating {
                rate: 4.1,
                count: 120,
            },
        }
    }

    #[test]
    fn test_product_serialization_roundtrip() {
        let product = sample_product(1, "electronics");

        let json = serde_json::to_string(&product).expect("Failed to serialize Product");
        let deserialized: Product =
            serde_json::from_str(&json).expect("Failed to deserialize Product");

        assert_eq!(deserialized, product);
    }

    #[test]
    fn test_product_parses_upstream_json_shape() {
        // Shape matches a record from GET /products
        let json = r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).expect("Failed to parse upstream JSON");

        assert_eq!(product.id, 1);
        assert_eq!(product.title, "Fjallraven - Foldsack No. 1 Backpack");
        assert!((product.price - 109.95).abs() < 0.001);
        assert_eq!(product.category, "men's clothing");
        assert!((product.rating.rate - 3.9).abs() < 0.001);
        assert_eq!(product.rating.count, 120);
    }

    #[test]
    fn test_catalog_product_by_id() {
        let catalog = Catalog::new(
            vec![
                sample_product(1, "electronics"),
                sample_product(2, "jewelery"),
            ],
            vec!["electronics".to_string(), "jewelery".to_string()],
        );

        assert_eq!(catalog.product_by_id(1).map(|p| p.id), Some(1));
        assert_eq!(catalog.product_by_id(2).map(|p| p.id), Some(2));
        assert!(catalog.product_by_id(99).is_none());
    }

    #[test]
    fn test_catalog_products_in_category() {
        let catalog = Catalog::new(
            vec![
                sample_product(1, "electronics"),
                sample_product(2, "jewelery"),
                sample_product(3, "electronics"),
            ],
            vec!["electronics".to_string(), "jewelery".to_string()],
        );

        let electronics = catalog.products_in_category("electronics");
        assert_eq!(electronics.len(), 2);
        assert!(electronics.iter().all(|p| p.category == "electronics"));

        assert!(catalog.products_in_category("toys").is_empty());
    }

    #[test]
    fn test_default_catalog_is_empty() {
        let catalog = Catalog::default();
        assert!(catalog.products.is_empty());
        assert!(catalog.categories.is_empty());
        assert!(catalog.fetched_at.is_none());
    }
}
