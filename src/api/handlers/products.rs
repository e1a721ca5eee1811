//! Handlers for read-only catalog endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::product::{ProductListResponse, ProductResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every catalog entry ordered by id.
///
/// # Endpoint
///
/// `GET /api/products`
///
/// # Response
///
/// ```json
/// {
///   "total": 24,
///   "items": [
///     { "id": 1, "title": "The Maid", "price_cents": 1499, "price": "$14.99", ... }
///   ]
/// }
/// ```
pub async fn product_list_handler(
    State(state): State<AppState>,
) -> Result<Json<ProductListResponse>, AppError> {
    let products = state.catalog_service.list_products().await?;

    let items: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

    Ok(Json(ProductListResponse {
        total: items.len(),
        items,
    }))
}

/// Returns one catalog entry.
///
/// # Endpoint
///
/// `GET /api/products/{id}`
///
/// # Errors
///
/// Returns `404 Not Found` with the JSON error envelope for an unknown id.
pub async fn product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.catalog_service.get_product(id).await?;
    Ok(Json(product.into()))
}
