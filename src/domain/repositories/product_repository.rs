//! Repository trait for catalog data access.

use crate::domain::entities::{NewProduct, Product};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the product catalog.
///
/// The catalog is read-only while the service is running; [`Self::replace_all`]
/// is only used by seeding.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteProductRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Lists every catalog entry ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Product>, AppError>;

    /// Finds a product by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Product))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Counts catalog entries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Replaces the whole catalog with `products`.
    ///
    /// Pending cart lines reference products and are discarded as well.
    /// Ids are assigned `1..=N` in input order. Runs in a single transaction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn replace_all(&self, products: Vec<NewProduct>) -> Result<u64, AppError>;
}
