//! SQLite implementation of the product repository.

use async_trait::async_trait;
use std::sync::Arc;

use super::rows::{PRODUCT_COLUMNS, ProductRow};
use crate::domain::entities::{NewProduct, Product};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;
use crate::infrastructure::db::DbPool;

/// SQLite repository for the product catalog.
pub struct SqliteProductRepository {
    pool: Arc<DbPool>,
}

impl SqliteProductRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn list(&self) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Product::from))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn replace_all(&self, products: Vec<NewProduct>) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM cart_lines")
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM products")
            .execute(&mut *tx)
            .await?;

        let mut inserted = 0u64;
        for (id, product) in (1i64..).zip(products) {
            sqlx::query(
                r#"
                INSERT INTO products (
                    id, title, author, price_cents, description, isbn,
                    category, image, publisher, published_on, rating, reviews
                )
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(id)
            .bind(product.title)
            .bind(product.author)
            .bind(product.price_cents)
            .bind(product.description)
            .bind(product.isbn)
            .bind(product.category)
            .bind(product.image)
            .bind(product.publisher)
            .bind(product.published_on)
            .bind(product.rating)
            .bind(product.reviews)
            .execute(&mut *tx)
            .await?;
            inserted += 1;
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
