//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures with small derived helpers (totals,
//! display formatting). Persistence concerns live in
//! `crate::infrastructure::persistence`.
//!
//! # Entity Types
//!
//! - [`Product`] - A catalog entry
//! - [`CartLine`] - A pending line item in a shopper's cart
//! - [`Order`] - A completed checkout with its [`OrderLine`]s
//!
//! # Design Pattern
//!
//! Separate structs are used for creation (`NewProduct`, `NewCartLine`) and
//! for projections used by the presentation layer (`CartItem`, `CartSummary`).

pub mod cart;
pub mod money;
pub mod order;
pub mod product;

pub use cart::{CartItem, CartLine, CartSummary, MAX_LINE_QUANTITY, NewCartLine};
pub use money::format_cents;
pub use order::{CustomerDetails, Order, OrderLine};
pub use product::{NewProduct, Product};
