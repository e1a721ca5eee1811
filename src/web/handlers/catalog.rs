//! Catalog page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use super::error::PageError;
use super::path_id::PathId;
use crate::state::AppState;
use crate::web::views::{CategoryView, ProductView, group_by_category};

/// Template for the storefront home page.
///
/// Renders `templates/home.html`: the catalog grouped by category.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub categories: Vec<CategoryView>,
    pub product_count: usize,
}

#[derive(Template, WebTemplate)]
#[template(path = "product_detail.html")]
pub struct ProductDetailTemplate {
    pub product: ProductView,
}

/// Renders every catalog entry.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> Result<HomeTemplate, PageError> {
    let products = state.catalog_service.list_products().await?;
    let product_count = products.len();

    Ok(HomeTemplate {
        categories: group_by_category(products),
        product_count,
    })
}

/// Renders one product with the add-to-basket form.
///
/// # Endpoint
///
/// `GET /product/{id}`
///
/// # Errors
///
/// Renders the not-found page (404) for an unknown id.
pub async fn product_detail_handler(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<ProductDetailTemplate, PageError> {
    let product = state.catalog_service.get_product(id).await?;

    Ok(ProductDetailTemplate {
        product: product.into(),
    })
}
