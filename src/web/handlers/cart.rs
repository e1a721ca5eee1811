//! Basket page and cart mutation handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension, Form,
    extract::State,
    response::Redirect,
};
use serde::Deserialize;

use super::error::PageError;
use super::path_id::PathId;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::middleware::CartKey;
use crate::web::views::CartView;

#[derive(Template, WebTemplate)]
#[template(path = "basket.html")]
pub struct BasketTemplate {
    pub cart: CartView,
}

/// Add-to-basket form body.
///
/// `quantity` is kept as text so that a blank field means 1 and a
/// non-numeric value is reported like any other invalid quantity.
#[derive(Debug, Default, Deserialize)]
pub struct AddToCartForm {
    #[serde(default)]
    pub quantity: Option<String>,
}

impl AddToCartForm {
    fn quantity(&self) -> Result<i64, AppError> {
        match self.quantity.as_deref().map(str::trim) {
            None | Some("") => Ok(1),
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::field("quantity", "Quantity must be a whole number.")),
        }
    }
}

/// Adds one copy of a product.
///
/// # Endpoint
///
/// `GET /add-to-cart/{id}`
///
/// Redirects (303) to `/basket`; renders the not-found page for an unknown
/// product.
pub async fn add_to_cart_link_handler(
    State(state): State<AppState>,
    Extension(CartKey(key)): Extension<CartKey>,
    PathId(product_id): PathId,
) -> Result<Redirect, PageError> {
    state.cart_service.add_item(&key, product_id, 1).await?;
    Ok(Redirect::to("/basket"))
}

/// Adds a product with the submitted quantity.
///
/// # Endpoint
///
/// `POST /add-to-cart/{id}` with form field `quantity` (default 1)
pub async fn add_to_cart_handler(
    State(state): State<AppState>,
    Extension(CartKey(key)): Extension<CartKey>,
    PathId(product_id): PathId,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect, PageError> {
    let quantity = form.quantity()?;
    state
        .cart_service
        .add_item(&key, product_id, quantity)
        .await?;
    Ok(Redirect::to("/basket"))
}

/// Removes one cart line.
///
/// # Endpoint
///
/// `GET|POST /remove-from-cart/{line_id}`
///
/// Redirects (303) to `/basket`; renders the not-found page when the line is
/// not in this cart.
pub async fn remove_from_cart_handler(
    State(state): State<AppState>,
    Extension(CartKey(key)): Extension<CartKey>,
    PathId(line_id): PathId,
) -> Result<Redirect, PageError> {
    state.cart_service.remove_item(&key, line_id).await?;
    Ok(Redirect::to("/basket"))
}

/// Renders the current cart with totals.
///
/// # Endpoint
///
/// `GET /basket`
pub async fn basket_handler(
    State(state): State<AppState>,
    Extension(CartKey(key)): Extension<CartKey>,
) -> Result<BasketTemplate, PageError> {
    let summary = state.cart_service.summary(&key).await?;

    Ok(BasketTemplate {
        cart: summary.into(),
    })
}
