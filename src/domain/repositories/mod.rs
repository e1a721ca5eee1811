//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access and are implemented by the SQLite
//! repositories in `crate::infrastructure::persistence`.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ProductRepository`] - Catalog reads and seeding
//! - [`CartRepository`] - Cart lines scoped by cart key
//! - [`OrderRepository`] - Atomic checkout and order lookup
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod cart_repository;
pub mod order_repository;
pub mod product_repository;

pub use cart_repository::CartRepository;
pub use order_repository::OrderRepository;
pub use product_repository::ProductRepository;

#[cfg(test)]
pub use cart_repository::MockCartRepository;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
#[cfg(test)]
pub use product_repository::MockProductRepository;
