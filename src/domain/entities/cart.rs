//! Cart entities: stored line items and their display projection.

use chrono::{DateTime, Utc};

use super::money::format_cents;
use super::product::Product;

/// Largest quantity a single cart line may hold.
pub const MAX_LINE_QUANTITY: i64 = 99;

/// A single pending (product, quantity) pairing held in a cart.
///
/// Lines are scoped by `cart_key`; repeat adds of the same product create
/// separate lines rather than bumping the quantity of an existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: i64,
    pub cart_key: String,
    pub product_id: i64,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
}

/// Input data for adding a line to a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartLine {
    pub cart_key: String,
    pub product_id: i64,
    pub quantity: i64,
}

/// A cart line resolved with its product, as listed on the basket page.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub line: CartLine,
    pub product: Product,
}

impl CartItem {
    /// Unit price multiplied by quantity, in cents. Saturates at `i64::MAX`.
    pub fn total_cents(&self) -> i64 {
        self.product.price_cents.saturating_mul(self.line.quantity)
    }

    pub fn display_total(&self) -> String {
        format_cents(self.total_cents())
    }
}

/// Cart contents with derived totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartSummary {
    pub items: Vec<CartItem>,
}

impl CartSummary {
    pub fn new(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line totals, in cents.
    pub fn total_cents(&self) -> i64 {
        self.items
            .iter()
            .map(CartItem::total_cents)
            .fold(0, i64::saturating_add)
    }

    pub fn display_total(&self) -> String {
        format_cents(self.total_cents())
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .map(|item| item.line.quantity)
            .fold(0, i64::saturating_add)
    }
}
