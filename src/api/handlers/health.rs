//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: Counts catalog rows
/// 2. **Catalog**: Seeded catalog is not empty
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected" },
///     "catalog": { "status": "ok", "message": "24 products" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let (db_check, catalog_check) = match state.catalog_service.count_products().await {
        Ok(count) => (CheckStatus::ok("Connected"), check_catalog(count)),
        Err(e) => (
            CheckStatus::error(format!("Database error: {}", e)),
            CheckStatus::error("Catalog unavailable"),
        ),
    };

    let all_healthy = db_check.is_ok() && catalog_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            catalog: catalog_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn check_catalog(count: i64) -> CheckStatus {
    if count > 0 {
        CheckStatus::ok(format!("{count} products"))
    } else {
        CheckStatus::error("Catalog is empty")
    }
}
