//! Fake Store API client
//!
//! This module provides functionality to fetch product and category data
//! from the Fake Store API and parse it into our data structures.

use reqwest::Client;
use thiserror::Error;

use super::Product;

/// Default base URL for the Fake Store API
pub const FAKE_STORE_BASE_URL: &str = "https://fakestoreapi.com";

/// Errors that can occur when fetching catalog data
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The server responded with a non-success status
    #[error("Unexpected status {status} from {url}")]
    BadStatus {
        /// HTTP status code returned
        status: u16,
        /// The URL that was requested
        url: String,
    },
}

/// Client for fetching products and categories from the Fake Store API
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogClient {
    /// Create a new CatalogClient pointing at the Fake Store API
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: FAKE_STORE_BASE_URL.to_string(),
        }
    }

    /// Create a new CatalogClient with a custom base URL
    ///
    /// Used by the `--api-url` flag and by tests that point at a local server.
    /// A trailing slash on the base URL is trimmed.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Returns the base URL this client requests against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full product list
    ///
    /// # Returns
    /// * `Ok(Vec<Product>)` - All products from `GET /products`
    /// * `Err(CatalogError)` - If the request or parsing fails
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = format!("{}/products", self.base_url);
        self.get_json(&url).await
    }

    /// Fetch the list of category names from `GET /products/categories`
    pub async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
        let url = format!("{}/products/categories", self.base_url);
        self.get_json(&url).await
    }

    /// Fetch the products belonging to a single category
    ///
    /// # Arguments
    /// * `category` - Category name as returned by `fetch_categories`
    pub async fn fetch_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        let url = format!("{}/products/category/{}", self.base_url, category);
        self.get_json(&url).await
    }

    /// Fetch a single product by its identifier from `GET /products/{id}`
    pub async fn fetch_product(&self, id: u64) -> Result<Product, CatalogError> {
        let url = format!("{}/products/{}", self.base_url, id);
        self.get_json(&url).await
    }

    /// Issues a GET request and decodes the JSON body
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::BadStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
