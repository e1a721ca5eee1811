//! HTML error pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub message: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub message: String,
}

/// An [`AppError`] rendered as an HTML page instead of the JSON envelope.
///
/// Storefront handlers return `Result<_, PageError>` and use `?` on service
/// calls.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self.0 {
            AppError::NotFound { message, .. } => {
                (StatusCode::NOT_FOUND, NotFoundTemplate { message }).into_response()
            }
            AppError::Validation { message, .. } => {
                (StatusCode::BAD_REQUEST, ErrorTemplate { message }).into_response()
            }
            AppError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorTemplate {
                    message: "Something went wrong. Please try again.".to_string(),
                },
            )
                .into_response(),
        }
    }
}

/// Fallback for unknown paths.
pub async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            message: "Page not found".to_string(),
        },
    )
}
