//! Numeric path parameter extractor for storefront pages.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde_json::json;

use super::error::PageError;
use crate::error::AppError;

/// The single `{id}` segment of a storefront route, parsed as `i64`.
///
/// A segment that is not a number (`/product/abc`) names no resource, so it
/// is rejected with the HTML not-found page rather than axum's plain-text 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub i64);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = PageError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| not_found(""))?;

        raw.parse().map(Self).map_err(|_| not_found(&raw))
    }
}

fn not_found(raw: &str) -> PageError {
    AppError::not_found("Page not found", json!({ "id": raw })).into()
}
