//! Storefront middleware.

pub mod cart_session;

pub use cart_session::CartKey;
