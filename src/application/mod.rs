//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide the operations the HTTP
//! handlers and the admin CLI call.
//!
//! # Available Services
//!
//! - [`services::catalog_service::CatalogService`] - Product listing and lookup
//! - [`services::cart_service::CartService`] - Cart line management per cart key
//! - [`services::checkout_service::CheckoutService`] - Contact validation and order placement

pub mod services;
