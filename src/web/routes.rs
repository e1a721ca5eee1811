//! Storefront route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    add_to_cart_handler, add_to_cart_link_handler, basket_handler, checkout_form_handler,
    checkout_submit_handler, checkout_success_handler, home_handler, product_detail_handler,
    remove_from_cart_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Read-only pages.
///
/// # Endpoints
///
/// - `GET /` - Catalog grouped by category
/// - `GET /product/{id}` - Product detail with add-to-basket form
/// - `GET /basket` - Cart lines and total
/// - `GET /checkout` - Checkout form with cart summary
/// - `GET /checkout/success/{order_id}` - Order confirmation
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/product/{id}", get(product_detail_handler))
        .route("/basket", get(basket_handler))
        .route("/checkout", get(checkout_form_handler))
        .route("/checkout/success/{order_id}", get(checkout_success_handler))
}

/// Routes that change cart or order state.
///
/// # Endpoints
///
/// - `GET|POST /add-to-cart/{id}` - Add a product, redirect to `/basket`
/// - `GET|POST /remove-from-cart/{line_id}` - Remove a line, redirect to `/basket`
/// - `POST /checkout` - Place the order
pub fn mutating_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/add-to-cart/{id}",
            get(add_to_cart_link_handler).post(add_to_cart_handler),
        )
        .route(
            "/remove-from-cart/{line_id}",
            get(remove_from_cart_handler).post(remove_from_cart_handler),
        )
        .route("/checkout", post(checkout_submit_handler))
}
