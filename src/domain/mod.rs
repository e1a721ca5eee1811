//! Domain layer containing business entities and data access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business rules live in services (see [`crate::application::services`])
//!
//! # Cart and Order Lifecycle
//!
//! 1. A shopper adds catalog products to the cart identified by their cart key
//! 2. Each add creates a new [`entities::CartLine`]; removal deletes one line
//! 3. Checkout validates contact details, then converts the lines into an
//!    [`entities::Order`] and empties the cart in one transaction

pub mod entities;
pub mod repositories;
