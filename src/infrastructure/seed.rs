//! Catalog fixture loading and startup reseeding.
//!
//! The catalog is static data: a JSON array of entries shipped in
//! `data/catalog.json` and embedded into the binary. `CATALOG_PATH` can point
//! to a different file with the same shape.
//!
//! ```json
//! {
//!   "title": "The Maid",
//!   "author": "Nita Prose",
//!   "price_cents": 1499,
//!   "description": "...",
//!   "isbn": "978-1982168971",
//!   "category": "Fiction",
//!   "image": "https://...",
//!   "publisher": "Viking",
//!   "published_on": "2022-01-04",
//!   "rating": 4.5,
//!   "reviews": 200
//! }
//! ```

use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::NewProduct;
use crate::domain::repositories::ProductRepository;

/// Catalog shipped with the service.
pub const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

/// ISBN-10 or ISBN-13, with an optional hyphen after the 978/979 prefix.
static ISBN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(97[89]-?)?[0-9]{9}[0-9X]$").unwrap());

/// One record of the catalog fixture.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CatalogEntry {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(min = 1, max = 100))]
    pub author: String,
    #[validate(range(min = 0))]
    pub price_cents: i64,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(regex(path = "*ISBN_REGEX", message = "Invalid ISBN"))]
    pub isbn: String,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    #[validate(length(min = 1, max = 500))]
    pub image: String,
    #[validate(length(min = 1, max = 100))]
    pub publisher: String,
    pub published_on: NaiveDate,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub reviews: Option<i64>,
}

impl From<CatalogEntry> for NewProduct {
    fn from(entry: CatalogEntry) -> Self {
        NewProduct {
            title: entry.title,
            author: entry.author,
            price_cents: entry.price_cents,
            description: entry.description,
            isbn: entry.isbn,
            category: entry.category,
            image: entry.image,
            publisher: entry.publisher,
            published_on: entry.published_on,
            rating: entry.rating,
            reviews: entry.reviews,
        }
    }
}

/// Parses and validates a catalog fixture.
///
/// # Errors
///
/// Returns an error naming the offending entry if the JSON is malformed or an
/// entry fails validation.
pub fn parse_catalog(json: &str) -> Result<Vec<NewProduct>> {
    let entries: Vec<CatalogEntry> =
        serde_json::from_str(json).context("Catalog fixture is not valid JSON")?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .validate()
                .with_context(|| format!("Invalid catalog entry #{index} ({})", entry.title))?;
            Ok(NewProduct::from(entry))
        })
        .collect()
}

/// Loads the catalog from `path`, or the embedded fixture when `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails [`parse_catalog`].
pub fn load_catalog(path: Option<&Path>) -> Result<Vec<NewProduct>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog from {}", path.display()))?;
            parse_catalog(&json)
        }
        None => parse_catalog(EMBEDDED_CATALOG),
    }
}

/// Replaces the stored catalog with `products`.
///
/// Pending cart lines are discarded with the old catalog; placed orders are
/// kept.
///
/// # Errors
///
/// Returns an error if the database write fails.
pub async fn refresh_catalog<P: ProductRepository + ?Sized>(
    repository: &P,
    products: Vec<NewProduct>,
) -> Result<u64> {
    let inserted = repository
        .replace_all(products)
        .await
        .context("Failed to refresh catalog")?;

    tracing::info!(products = inserted, "catalog seeded");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockProductRepository;
    use std::collections::HashSet;

    #[test]
    fn test_embedded_catalog_is_valid() {
        let products = parse_catalog(EMBEDDED_CATALOG).unwrap();

        assert_eq!(products.len(), 24);

        let categories: HashSet<_> = products.iter().map(|p| p.category.as_str()).collect();
        assert_eq!(categories.len(), 4);
        assert!(categories.contains("Science Fiction"));
    }

    #[test]
    fn test_embedded_catalog_keeps_unbounded_rating() {
        let products = parse_catalog(EMBEDDED_CATALOG).unwrap();

        let darker = products
            .iter()
            .find(|p| p.title == "You Like It Darker: Stories")
            .unwrap();
        assert_eq!(darker.rating, Some(5.5));
        assert_eq!(darker.price_cents, 1890);
    }

    #[test]
    fn test_parse_catalog_rejects_negative_price() {
        let json = r#"[{
            "title": "Broken", "author": "Nobody", "price_cents": -1,
            "description": "x", "isbn": "978-1982168971", "category": "Fiction",
            "image": "https://example.com/x.jpg", "publisher": "P",
            "published_on": "2024-01-01"
        }]"#;

        let err = parse_catalog(json).unwrap_err();
        assert!(err.to_string().contains("#0"));
    }

    #[test]
    fn test_parse_catalog_rejects_bad_isbn() {
        let json = r#"[{
            "title": "Broken", "author": "Nobody", "price_cents": 100,
            "description": "x", "isbn": "12-34", "category": "Fiction",
            "image": "https://example.com/x.jpg", "publisher": "P",
            "published_on": "2024-01-01"
        }]"#;

        assert!(parse_catalog(json).is_err());
    }

    #[test]
    fn test_parse_catalog_optional_fields_default_to_none() {
        let json = r#"[{
            "title": "Quiet", "author": "Someone", "price_cents": 999,
            "description": "x", "isbn": "1982168971", "category": "Biography",
            "image": "https://example.com/x.jpg", "publisher": "P",
            "published_on": "2020-02-02"
        }]"#;

        let products = parse_catalog(json).unwrap();
        assert_eq!(products[0].rating, None);
        assert_eq!(products[0].reviews, None);
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let result = load_catalog(Some(Path::new("/nonexistent/catalog.json")));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_refresh_catalog_replaces_all() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_replace_all()
            .withf(|products| products.len() == 24)
            .times(1)
            .returning(|products| Ok(products.len() as u64));

        let products = parse_catalog(EMBEDDED_CATALOG).unwrap();
        let inserted = refresh_catalog(&mock_repo, products).await.unwrap();

        assert_eq!(inserted, 24);
    }
}
