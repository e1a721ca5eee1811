//! SQLite implementation of the order repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;

use super::rows::{OrderLineRow, OrderRow};
use super::sqlite_cart_repository::delete_cart_lines;
use crate::domain::entities::{CustomerDetails, Order, OrderLine};
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;
use crate::infrastructure::db::DbPool;

/// SQLite repository for placed orders.
///
/// Checkout runs in a single transaction, so a failure at any step leaves
/// both the cart and the order tables untouched.
pub struct SqliteOrderRepository {
    pool: Arc<DbPool>,
}

impl SqliteOrderRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    async fn lines_for(&self, order_id: i64) -> Result<Vec<OrderLine>, AppError> {
        let rows = sqlx::query_as::<_, OrderLineRow>(
            r#"
            SELECT order_id, product_id, title, unit_price_cents, quantity
            FROM order_lines
            WHERE order_id = ?
            ORDER BY id
            "#,
        )
        .bind(order_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(OrderLine::from).collect())
    }

    async fn with_lines(&self, row: Option<OrderRow>) -> Result<Option<Order>, AppError> {
        match row {
            Some(row) => {
                let lines = self.lines_for(row.id).await?;
                Ok(Some(to_order(row, lines)))
            }
            None => Ok(None),
        }
    }
}

fn to_order(row: OrderRow, lines: Vec<OrderLine>) -> Order {
    Order {
        id: row.id,
        customer: CustomerDetails {
            name: row.customer_name,
            address: row.customer_address,
            email: row.customer_email,
        },
        lines,
        created_at: row.created_at,
    }
}

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    async fn place_from_cart(
        &self,
        cart_key: &str,
        customer: CustomerDetails,
    ) -> Result<Option<Order>, AppError> {
        let mut tx = self.pool.begin().await?;

        let snapshot = sqlx::query_as::<_, (i64, String, i64, i64)>(
            r#"
            SELECT c.product_id, p.title, p.price_cents, c.quantity
            FROM cart_lines c
            JOIN products p ON p.id = c.product_id
            WHERE c.cart_key = ?
            ORDER BY c.id
            "#,
        )
        .bind(cart_key)
        .fetch_all(&mut *tx)
        .await?;

        if snapshot.is_empty() {
            tx.rollback().await?;
            return Ok(None);
        }

        let created_at = Utc::now();
        let order_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO orders (cart_key, customer_name, customer_address, customer_email, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(cart_key)
        .bind(&customer.name)
        .bind(&customer.address)
        .bind(&customer.email)
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await?;

        let mut lines = Vec::with_capacity(snapshot.len());
        for (product_id, title, unit_price_cents, quantity) in snapshot {
            sqlx::query(
                r#"
                INSERT INTO order_lines (order_id, product_id, title, unit_price_cents, quantity)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(order_id)
            .bind(product_id)
            .bind(&title)
            .bind(unit_price_cents)
            .bind(quantity)
            .execute(&mut *tx)
            .await?;

            lines.push(OrderLine {
                product_id,
                title,
                unit_price_cents,
                quantity,
            });
        }

        delete_cart_lines(&mut *tx, cart_key).await?;
        tx.commit().await?;

        Ok(Some(Order {
            id: order_id,
            customer,
            lines,
            created_at,
        }))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, customer_name, customer_address, customer_email, created_at
            FROM orders
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        self.with_lines(row).await
    }

    async fn find_for_cart(&self, cart_key: &str, id: i64) -> Result<Option<Order>, AppError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, customer_name, customer_address, customer_email, created_at
            FROM orders
            WHERE id = ? AND cart_key = ?
            "#,
        )
        .bind(id)
        .bind(cart_key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        self.with_lines(row).await
    }

    async fn list(&self) -> Result<Vec<Order>, AppError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, customer_name, customer_address, customer_email, created_at
            FROM orders
            ORDER BY id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        let line_rows = sqlx::query_as::<_, OrderLineRow>(
            r#"
            SELECT order_id, product_id, title, unit_price_cents, quantity
            FROM order_lines
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut lines_by_order: HashMap<i64, Vec<OrderLine>> = HashMap::new();
        for line in line_rows {
            lines_by_order
                .entry(line.order_id)
                .or_default()
                .push(line.into());
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let lines = lines_by_order.remove(&row.id).unwrap_or_default();
                to_order(row, lines)
            })
            .collect())
    }
}
