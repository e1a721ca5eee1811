//! Catalog browsing service.

use std::sync::Arc;

use crate::domain::entities::Product;
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for reading the product catalog.
pub struct CatalogService<P: ProductRepository> {
    repository: Arc<P>,
}

impl<P: ProductRepository> CatalogService<P> {
    /// Creates a new catalog service.
    pub fn new(repository: Arc<P>) -> Self {
        Self { repository }
    }

    /// Lists every catalog entry in a stable order.
    ///
    /// Titles listed under several categories appear once per entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a single product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_product(&self, id: i64) -> Result<Product, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found", json!({ "id": id })))
    }

    /// Counts catalog entries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_products(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
