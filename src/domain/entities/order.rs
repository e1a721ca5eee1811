//! Order entity representing a completed checkout.

use chrono::{DateTime, Utc};

use super::money::format_cents;

/// Contact details collected by the checkout form.
///
/// Values are expected to be validated and trimmed before they reach the
/// repository layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDetails {
    pub name: String,
    pub address: String,
    pub email: String,
}

/// One purchased entry of an order.
///
/// Title and unit price are captured at checkout time so that the order stays
/// readable after the catalog is reseeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: i64,
    pub title: String,
    pub unit_price_cents: i64,
    pub quantity: i64,
}

impl OrderLine {
    pub fn total_cents(&self) -> i64 {
        self.unit_price_cents.saturating_mul(self.quantity)
    }

    pub fn display_unit_price(&self) -> String {
        format_cents(self.unit_price_cents)
    }

    pub fn display_total(&self) -> String {
        format_cents(self.total_cents())
    }
}

/// An immutable record of a completed checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub customer: CustomerDetails,
    pub lines: Vec<OrderLine>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn total_cents(&self) -> i64 {
        self.lines
            .iter()
            .map(OrderLine::total_cents)
            .fold(0, i64::saturating_add)
    }

    pub fn display_total(&self) -> String {
        format_cents(self.total_cents())
    }

    pub fn item_count(&self) -> i64 {
        self.lines
            .iter()
            .map(|line| line.quantity)
            .fold(0, i64::saturating_add)
    }
}
