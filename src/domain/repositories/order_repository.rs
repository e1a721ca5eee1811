//! Repository trait for placed orders.

use crate::domain::entities::{CustomerDetails, Order};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for orders.
///
/// Orders are created only through [`Self::place_from_cart`] and are never
/// updated or deleted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Converts the contents of a cart into an order, atomically.
    ///
    /// Within one transaction: snapshots the cart's lines, inserts the order
    /// and one order line per cart line, then deletes the cart's lines.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Order))` with the persisted order
    /// - `Ok(None)` if the cart was empty; nothing is written
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors; the transaction is
    /// rolled back and the cart is left untouched.
    async fn place_from_cart(
        &self,
        cart_key: &str,
        customer: CustomerDetails,
    ) -> Result<Option<Order>, AppError>;

    /// Finds an order with its lines.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError>;

    /// Finds an order with its lines, only if it was placed from `cart_key`.
    ///
    /// # Returns
    ///
    /// - `Ok(None)` if the order does not exist or belongs to another cart
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_for_cart(&self, cart_key: &str, id: i64) -> Result<Option<Order>, AppError>;

    /// Lists orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Order>, AppError>;
}
