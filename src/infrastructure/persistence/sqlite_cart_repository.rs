//! SQLite implementation of the cart repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Executor, Sqlite};
use std::sync::Arc;

use super::rows::{CartItemRow, CartLineRow};
use crate::domain::entities::{CartItem, CartLine, NewCartLine};
use crate::domain::repositories::CartRepository;
use crate::error::AppError;
use crate::infrastructure::db::DbPool;

/// SQLite repository for cart lines.
pub struct SqliteCartRepository {
    pool: Arc<DbPool>,
}

impl SqliteCartRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

/// Deletes every line of a cart through `executor`.
///
/// Shared with the order repository, which runs it inside the checkout
/// transaction.
pub(crate) async fn delete_cart_lines<'e, E>(executor: E, cart_key: &str) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM cart_lines WHERE cart_key = ?")
        .bind(cart_key)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}

#[async_trait]
impl CartRepository for SqliteCartRepository {
    async fn insert(&self, new_line: NewCartLine) -> Result<CartLine, AppError> {
        let row = sqlx::query_as::<_, CartLineRow>(
            r#"
            INSERT INTO cart_lines (cart_key, product_id, quantity, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, cart_key, product_id, quantity, created_at
            "#,
        )
        .bind(new_line.cart_key)
        .bind(new_line.product_id)
        .bind(new_line.quantity)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, cart_key: &str, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM cart_lines WHERE id = ? AND cart_key = ?")
            .bind(id)
            .bind(cart_key)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, cart_key: &str) -> Result<Vec<CartItem>, AppError> {
        let rows = sqlx::query_as::<_, CartItemRow>(
            r#"
            SELECT
                c.id AS line_id,
                c.cart_key,
                c.quantity,
                c.created_at,
                p.id,
                p.title,
                p.author,
                p.price_cents,
                p.description,
                p.isbn,
                p.category,
                p.image,
                p.publisher,
                p.published_on,
                p.rating,
                p.reviews
            FROM cart_lines c
            JOIN products p ON p.id = c.product_id
            WHERE c.cart_key = ?
            ORDER BY c.id
            "#,
        )
        .bind(cart_key)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(CartItem::from).collect())
    }

    async fn clear(&self, cart_key: &str) -> Result<u64, AppError> {
        Ok(delete_cart_lines(self.pool.as_ref(), cart_key).await?)
    }

    async fn open_carts(&self) -> Result<Vec<(String, i64)>, AppError> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT cart_key, COUNT(*) FROM cart_lines GROUP BY cart_key ORDER BY cart_key",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }
}
