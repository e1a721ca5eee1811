//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{CartService, CatalogService, CheckoutService};
use crate::infrastructure::db::DbPool;
use crate::infrastructure::persistence::{
    SqliteCartRepository, SqliteOrderRepository, SqliteProductRepository,
};

pub type Catalog = CatalogService<SqliteProductRepository>;
pub type Cart = CartService<SqliteCartRepository, SqliteProductRepository>;
pub type Checkout = CheckoutService<SqliteOrderRepository>;

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<Catalog>,
    pub cart_service: Arc<Cart>,
    pub checkout_service: Arc<Checkout>,
    /// Whether the `cart_id` cookie is issued with the `Secure` attribute.
    pub cookie_secure: bool,
}

impl AppState {
    /// Wires repositories and services over one connection pool.
    pub fn new(pool: Arc<DbPool>, cookie_secure: bool) -> Self {
        let product_repository = Arc::new(SqliteProductRepository::new(pool.clone()));
        let cart_repository = Arc::new(SqliteCartRepository::new(pool.clone()));
        let order_repository = Arc::new(SqliteOrderRepository::new(pool));

        Self {
            catalog_service: Arc::new(CatalogService::new(product_repository.clone())),
            cart_service: Arc::new(CartService::new(cart_repository, product_repository)),
            checkout_service: Arc::new(CheckoutService::new(order_repository)),
            cookie_secure,
        }
    }
}
