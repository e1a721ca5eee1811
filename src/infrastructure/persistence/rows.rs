//! Row types decoded by the SQLite repositories.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::entities::{CartItem, CartLine, OrderLine, Product};

/// Column list matching [`ProductRow`], for queries on `products`.
pub(crate) const PRODUCT_COLUMNS: &str = "id, title, author, price_cents, description, isbn, \
     category, image, publisher, published_on, rating, reviews";

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ProductRow {
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
    pub rating: Option<f64>,
    pub reviews: Option<i64>,
}

impl From<ProductRow> for Product {
    fn from(r: ProductRow) -> Self {
        Product {
            id: r.id,
            title: r.title,
            author: r.author,
            price_cents: r.price_cents,
            description: r.description,
            isbn: r.isbn,
            category: r.category,
            image: r.image,
            publisher: r.publisher,
            published_on: r.published_on,
            rating: r.rating,
            reviews: r.reviews,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct CartLineRow {
    pub id: i64,
    pub cart_key: String,
    pub product_id: i64,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
}

impl From<CartLineRow> for CartLine {
    fn from(r: CartLineRow) -> Self {
        CartLine {
            id: r.id,
            cart_key: r.cart_key,
            product_id: r.product_id,
            quantity: r.quantity,
            created_at: r.created_at,
        }
    }
}

/// A cart line joined with its product (`cart_lines` ⋈ `products`).
///
/// The line id is selected as `line_id` so it does not clash with the
/// product's `id`.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct CartItemRow {
    pub line_id: i64,
    pub cart_key: String,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    #[sqlx(flatten)]
    pub product: ProductRow,
}

impl From<CartItemRow> for CartItem {
    fn from(r: CartItemRow) -> Self {
        CartItem {
            line: CartLine {
                id: r.line_id,
                cart_key: r.cart_key,
                product_id: r.product.id,
                quantity: r.quantity,
                created_at: r.created_at,
            },
            product: r.product.into(),
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct OrderRow {
    pub id: i64,
    pub customer_name: String,
    pub customer_address: String,
    pub customer_email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct OrderLineRow {
    pub order_id: i64,
    pub product_id: i64,
    pub title: String,
    pub unit_price_cents: i64,
    pub quantity: i64,
}

impl From<OrderLineRow> for OrderLine {
    fn from(r: OrderLineRow) -> Self {
        OrderLine {
            product_id: r.product_id,
            title: r.title,
            unit_price_cents: r.unit_price_cents,
            quantity: r.quantity,
        }
    }
}
