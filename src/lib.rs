//! # Paperback Collections
//!
//! A small online bookstore built with Axum and SQLite: a browsable catalog,
//! a cookie-keyed shopping cart and a checkout that turns the cart into an
//! order.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Catalog, cart and checkout services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, repositories and catalog seeding
//! - **API Layer** ([`api`]) - Read-only JSON catalog endpoints and health check
//! - **Web Layer** ([`web`]) - Server-rendered storefront pages
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://bookstore.db?mode=rwc"  # Optional
//!
//! # Migrations and the catalog seed run on startup
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        CartService, CatalogService, CheckoutInput, CheckoutService,
    };
    pub use crate::domain::entities::{CartItem, CartSummary, Order, Product};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
