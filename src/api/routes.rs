//! API route configuration.
//!
//! The API is read-only and unauthenticated; cart and checkout are only
//! reachable through the storefront.

use crate::api::handlers::{health_handler, product_handler, product_list_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET /health`         - Database and catalog check
/// - `GET /products`       - Every catalog entry
/// - `GET /products/{id}`  - One catalog entry
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/products", get(product_list_handler))
        .route("/products/{id}", get(product_handler))
}
