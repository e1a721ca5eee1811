//! Storefront layer for browser-based UI.
//!
//! Provides HTML pages for the catalog, the basket and checkout.
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Cart session cookie
//! - [`routes`] - Storefront route configuration
//! - [`views`] - Display models passed to templates

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod views;
