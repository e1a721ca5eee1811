//! Checkout form and confirmation handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension, Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use super::error::PageError;
use super::path_id::PathId;
use crate::application::services::CheckoutInput;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::middleware::CartKey;
use crate::web::views::{CartView, CheckoutFormView, FieldErrors, OrderView};

/// Template for the checkout page.
///
/// Renders `templates/checkout.html` with:
/// - Cart summary
/// - Contact form with the submitted values
/// - Per-field error messages after a failed submission
#[derive(Template, WebTemplate)]
#[template(path = "checkout.html")]
pub struct CheckoutTemplate {
    pub cart: CartView,
    pub form: CheckoutFormView,
    pub errors: FieldErrors,
}

#[derive(Template, WebTemplate)]
#[template(path = "checkout_success.html")]
pub struct CheckoutSuccessTemplate {
    pub order: OrderView,
}

/// Renders the empty checkout form.
///
/// # Endpoint
///
/// `GET /checkout`
pub async fn checkout_form_handler(
    State(state): State<AppState>,
    Extension(CartKey(key)): Extension<CartKey>,
) -> Result<CheckoutTemplate, PageError> {
    let summary = state.cart_service.summary(&key).await?;

    Ok(CheckoutTemplate {
        cart: summary.into(),
        form: CheckoutFormView::default(),
        errors: FieldErrors::default(),
    })
}

/// Places an order from the cart.
///
/// # Endpoint
///
/// `POST /checkout` with form fields `name`, `address`, `email`
///
/// # Responses
///
/// - **303 See Other** to `/checkout/success/{order_id}` on success
/// - **422 Unprocessable Entity** with the form re-rendered on validation
///   failure; the cart is unchanged
pub async fn checkout_submit_handler(
    State(state): State<AppState>,
    Extension(CartKey(key)): Extension<CartKey>,
    Form(input): Form<CheckoutInput>,
) -> Result<Response, PageError> {
    match state.checkout_service.checkout(&key, input.clone()).await {
        Ok(order) => {
            Ok(Redirect::to(&format!("/checkout/success/{}", order.id)).into_response())
        }
        Err(err @ AppError::Validation { .. }) => {
            let summary = state.cart_service.summary(&key).await?;
            let page = CheckoutTemplate {
                cart: summary.into(),
                form: CheckoutFormView::from(&input),
                errors: FieldErrors::from(&err),
            };
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// Renders the confirmation page for a placed order.
///
/// # Endpoint
///
/// `GET /checkout/success/{order_id}`
///
/// Only the cart that placed the order may view it; anyone else gets the
/// not-found page.
pub async fn checkout_success_handler(
    State(state): State<AppState>,
    Extension(CartKey(key)): Extension<CartKey>,
    PathId(order_id): PathId,
) -> Result<CheckoutSuccessTemplate, PageError> {
    let order = state.checkout_service.order_for_cart(&key, order_id).await?;

    Ok(CheckoutSuccessTemplate {
        order: order.into(),
    })
}
