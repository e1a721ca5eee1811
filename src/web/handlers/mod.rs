//! HTML template rendering handlers for the storefront.

mod cart;
mod catalog;
mod checkout;
mod error;
mod path_id;

pub use cart::{
    add_to_cart_handler, add_to_cart_link_handler, basket_handler, remove_from_cart_handler,
};
pub use catalog::{home_handler, product_detail_handler};
pub use checkout::{checkout_form_handler, checkout_submit_handler, checkout_success_handler};
pub use error::{PageError, not_found_handler};
pub use path_id::PathId;
