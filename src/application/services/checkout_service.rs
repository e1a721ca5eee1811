//! Checkout workflow: contact validation and order placement.

use std::borrow::Cow;
use std::sync::Arc;

use crate::domain::entities::{CustomerDetails, Order};
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;
use serde::Deserialize;
use serde_json::json;
use validator::{Validate, ValidationError};

/// Contact details submitted with the checkout form.
///
/// Fields default to empty strings so that a form missing a field is reported
/// as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CheckoutInput {
    #[serde(default)]
    #[validate(custom(function = "required"))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "required"))]
    pub address: String,

    #[serde(default)]
    #[validate(
        custom(function = "required"),
        email(message = "Invalid email address.")
    )]
    pub email: String,
}

impl CheckoutInput {
    /// Returns a copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }
}

fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some(Cow::Borrowed("This field is required."));
        return Err(err);
    }
    Ok(())
}

/// Service that turns a cart into an order.
///
/// # State Machine
///
/// Each submission is evaluated on its own:
///
/// - invalid contact details: nothing is written, the caller redisplays the
///   form with the field errors and the unchanged cart
/// - valid details: the cart is converted into exactly one order and emptied
pub struct CheckoutService<O: OrderRepository> {
    order_repository: Arc<O>,
}

impl<O: OrderRepository> CheckoutService<O> {
    /// Creates a new checkout service.
    pub fn new(order_repository: Arc<O>) -> Self {
        Self { order_repository }
    }

    /// Validates contact details and places an order from the cart.
    ///
    /// Validation happens before any mutation. On success the order carries
    /// one line per cart line as they were at submission time and the cart is
    /// left empty.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] keyed by field (`name`, `address`,
    /// `email`) if contact details are invalid, or keyed `cart` if the cart
    /// is empty. Nothing is written in either case.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn checkout(&self, cart_key: &str, input: CheckoutInput) -> Result<Order, AppError> {
        let input = input.trimmed();
        input.validate()?;

        let customer = CustomerDetails {
            name: input.name,
            address: input.address,
            email: input.email,
        };

        let order = self
            .order_repository
            .place_from_cart(cart_key, customer)
            .await?
            .ok_or_else(|| AppError::field("cart", "Your cart is empty."))?;

        tracing::info!(
            order_id = order.id,
            lines = order.lines.len(),
            total_cents = order.total_cents(),
            "order placed"
        );

        Ok(order)
    }

    /// Retrieves the confirmation of an order placed from `cart_key`.
    ///
    /// Orders placed from another cart are reported as missing, so a visitor
    /// cannot read other customers' contact details by guessing ids.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the order does not exist or was
    /// placed from another cart.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn order_for_cart(&self, cart_key: &str, id: i64) -> Result<Order, AppError> {
        self.order_repository
            .find_for_cart(cart_key, id)
            .await?
            .ok_or_else(|| AppError::not_found("Order not found", json!({ "id": id })))
    }

    /// Retrieves any placed order, for operator tooling.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the order does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_order(&self, id: i64) -> Result<Order, AppError> {
        self.order_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Order not found", json!({ "id": id })))
    }

    /// Lists placed orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        self.order_repository.list().await
    }
}
