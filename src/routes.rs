//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `/`, `/product/*`, `/basket`, `/checkout*` - Storefront pages
//! - `/add-to-cart/*`, `/remove-from-cart/*`   - Cart mutations (redirect to `/basket`)
//! - `/api/*`                                  - Read-only JSON catalog and health check
//! - `/static/*`                               - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on cart mutations and checkout
//! - **Cart session** - `cart_id` cookie issued and resolved for storefront pages
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::cart_session;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let web_mutating = web::routes::mutating_routes().layer(rate_limit::layer());

    let web_router = Router::new()
        .merge(web::routes::public_routes())
        .merge(web_mutating)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            cart_session::layer,
        ));

    let router = Router::new()
        .merge(web_router)
        .nest("/api", api::routes::routes())
        .nest_service("/static", ServeDir::new("static"))
        .fallback(web::handlers::not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
