//! Repository trait for cart line storage.

use crate::domain::entities::{CartItem, CartLine, NewCartLine};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for pending cart lines.
///
/// Every operation is scoped by a cart key; lines stored under one key are
/// never visible through another.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Inserts a new line with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a foreign
    /// key violation if the product vanished in the meantime.
    async fn insert(&self, new_line: NewCartLine) -> Result<CartLine, AppError>;

    /// Deletes one line.
    ///
    /// Returns `Ok(true)` if a line with `id` existed under `cart_key` and was
    /// deleted, `Ok(false)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, cart_key: &str, id: i64) -> Result<bool, AppError>;

    /// Lists the lines of a cart in insertion order, each joined with its product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, cart_key: &str) -> Result<Vec<CartItem>, AppError>;

    /// Deletes every line of a cart and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn clear(&self, cart_key: &str) -> Result<u64, AppError>;

    /// Lists cart keys that currently hold lines, with their line counts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn open_carts(&self) -> Result<Vec<(String, i64)>, AppError>;
}
