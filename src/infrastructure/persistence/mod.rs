//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx queries
//! decoded into `FromRow` row types.
//!
//! # Repositories
//!
//! - [`SqliteProductRepository`] - Catalog reads and reseeding
//! - [`SqliteCartRepository`] - Cart lines per cart key
//! - [`SqliteOrderRepository`] - Transactional checkout and order lookup

mod rows;
pub mod sqlite_cart_repository;
pub mod sqlite_order_repository;
pub mod sqlite_product_repository;

pub use sqlite_cart_repository::SqliteCartRepository;
pub use sqlite_order_repository::SqliteOrderRepository;
pub use sqlite_product_repository::SqliteProductRepository;
