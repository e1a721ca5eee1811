//! Product entity representing a catalog entry.

use chrono::NaiveDate;

use super::money::format_cents;

/// A book offered in the catalog.
///
/// Products are seeded at startup and never mutated afterwards. The same title
/// may appear several times under different categories; each appearance is a
/// separate catalog entry with its own `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub price_cents: i64,
    pub description: String,
    pub isbn: String,
    pub category: String,
    pub image: String,
    pub publisher: String,
    pub published_on: NaiveDate,
    /// Unbounded: the seed data contains ratings above 5.
    pub rating: Option<f64>,
    pub reviews: Option<i64>,
}

impl Product {
    /// Formatted unit price, e.g. `$18.90`.
    pub fn display_price(&self) -> String {
        format_cents(self.price_cents)
    }

    /// Publication date as shown on product pages, e.g. `May 21, 2024`.
    pub fn display_published_on(&self) -> String {
        self.published_on.format("%B %-d, %Y").to_string()
    }
}

/// Input data for inserting a catalog entry during seeding.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub author: String,
    pub price_cents: i64,
    pub description: String,
    pub isbn: String,
    pub category: String,
    pub image: String,
    pub publisher: String,
    pub published_on: NaiveDate,
    pub rating: Option<f64>,
    pub reviews: Option<i64>,
}

#[cfg(test)]
pub(crate) fn sample_product(id: i64) -> Product {
    Product {
        id,
        title: "The Maid".to_string(),
        author: "Nita Prose".to_string(),
        price_cents: 1499,
        description: "A maid becomes embroiled in a mystery.".to_string(),
        isbn: "978-1982168971".to_string(),
        category: "Fiction".to_string(),
        image: "https://example.com/maid.jpg".to_string(),
        publisher: "Viking".to_string(),
        published_on: NaiveDate::from_ymd_opt(2022, 1, 4).unwrap(),
        rating: Some(4.5),
        reviews: Some(200),
    }
}
