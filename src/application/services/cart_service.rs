//! Cart management service.

use std::sync::Arc;

use crate::domain::entities::{CartLine, CartSummary, MAX_LINE_QUANTITY, NewCartLine};
use crate::domain::repositories::{CartRepository, ProductRepository};
use crate::error::AppError;
use serde_json::json;

/// Service for adding, removing and listing cart lines.
///
/// Every operation takes the shopper's cart key; the web layer obtains it from
/// the `cart_id` cookie (see `crate::web::middleware::cart_session`).
pub struct CartService<C: CartRepository, P: ProductRepository> {
    cart_repository: Arc<C>,
    product_repository: Arc<P>,
}

impl<C: CartRepository, P: ProductRepository> CartService<C, P> {
    /// Creates a new cart service.
    pub fn new(cart_repository: Arc<C>, product_repository: Arc<P>) -> Self {
        Self {
            cart_repository,
            product_repository,
        }
    }

    /// Adds a product to a cart as a new line.
    ///
    /// Adding a product that is already in the cart creates a second line
    /// instead of increasing the quantity of the first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] (field `quantity`) if `quantity` is
    /// outside `1..=MAX_LINE_QUANTITY`.
    /// Returns [`AppError::NotFound`] if the product does not exist; the cart
    /// is left unchanged.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn add_item(
        &self,
        cart_key: &str,
        product_id: i64,
        quantity: i64,
    ) -> Result<CartLine, AppError> {
        if quantity < 1 {
            return Err(AppError::field("quantity", "Quantity must be at least 1."));
        }
        if quantity > MAX_LINE_QUANTITY {
            return Err(AppError::field(
                "quantity",
                format!("Quantity cannot be more than {MAX_LINE_QUANTITY}."),
            ));
        }

        if self
            .product_repository
            .find_by_id(product_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found(
                "Product not found",
                json!({ "id": product_id }),
            ));
        }

        let line = self
            .cart_repository
            .insert(NewCartLine {
                cart_key: cart_key.to_string(),
                product_id,
                quantity,
            })
            .await?;

        tracing::info!(
            line_id = line.id,
            product_id,
            quantity,
            "cart line added"
        );

        Ok(line)
    }

    /// Removes one line from a cart.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the line does not exist in this cart,
    /// including when it was already removed.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn remove_item(&self, cart_key: &str, line_id: i64) -> Result<(), AppError> {
        if !self.cart_repository.delete(cart_key, line_id).await? {
            return Err(AppError::not_found(
                "Cart item not found",
                json!({ "id": line_id }),
            ));
        }

        tracing::info!(line_id, "cart line removed");
        Ok(())
    }

    /// Lists the cart's lines with their products and derived totals.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn summary(&self, cart_key: &str) -> Result<CartSummary, AppError> {
        let items = self.cart_repository.list(cart_key).await?;
        Ok(CartSummary::new(items))
    }

    /// Empties a cart.
    ///
    /// Checkout clears the cart inside its own transaction; this entry point
    /// serves operator cleanup of abandoned carts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn clear(&self, cart_key: &str) -> Result<u64, AppError> {
        let removed = self.cart_repository.clear(cart_key).await?;
        tracing::info!(removed, "cart cleared");
        Ok(removed)
    }

    /// Lists carts that currently hold lines, with line counts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn open_carts(&self) -> Result<Vec<(String, i64)>, AppError> {
        self.cart_repository.open_carts().await
    }
}
