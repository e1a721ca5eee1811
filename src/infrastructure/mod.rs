//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`db`] - SQLite connection pool and embedded migrations
//! - [`persistence`] - SQLite repository implementations
//! - [`seed`] - Catalog fixture loading and startup reseeding

pub mod db;
pub mod persistence;
pub mod seed;
