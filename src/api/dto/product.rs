//! DTOs for catalog endpoints.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::Product;

/// Catalog entry as returned by `/api/products`.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub price_cents: i64,
    /// Formatted price, e.g. `"$14.99"`.
    pub price: String,
    pub description: String,
    pub isbn: String,
    pub category: String,
    pub image: String,
    pub publisher: String,
    pub published_on: NaiveDate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<i64>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            price: product.display_price(),
            id: product.id,
            title: product.title,
            author: product.author,
            price_cents: product.price_cents,
            description: product.description,
            isbn: product.isbn,
            category: product.category,
            image: product.image,
            publisher: product.publisher,
            published_on: product.published_on,
            rating: product.rating,
            reviews: product.reviews,
        }
    }
}

/// Response for `GET /api/products`.
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub total: usize,
    pub items: Vec<ProductResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::product::sample_product;
    use serde_json::json;

    #[test]
    fn test_product_response_serialization() {
        let response = ProductResponse::from(sample_product(3));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["id"], 3);
        assert_eq!(value["price_cents"], 1499);
        assert_eq!(value["price"], "$14.99");
        assert_eq!(value["published_on"], "2022-01-04");
        assert_eq!(value["rating"], json!(4.5));
    }

    #[test]
    fn test_missing_rating_is_omitted() {
        let product = Product {
            rating: None,
            reviews: None,
            ..sample_product(1)
        };
        let value = serde_json::to_value(ProductResponse::from(product)).unwrap();

        assert!(value.get("rating").is_none());
        assert!(value.get("reviews").is_none());
    }
}
