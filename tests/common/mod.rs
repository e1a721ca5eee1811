#![allow(dead_code)]

use axum::extract::Request;
use axum::{Router, ServiceExt, middleware};
use std::net::SocketAddr;
use axum_test::TestServer;
use std::sync::Arc;
use paperback_collections::api;
use paperback_collections::routes::app_router;
use paperback_collections::infrastructure::db::{self, DbPool};
use paperback_collections::infrastructure::persistence::SqliteProductRepository;
use paperback_collections::infrastructure::seed::{EMBEDDED_CATALOG, parse_catalog, refresh_catalog};
use paperback_collections::state::AppState;
use paperback_collections::web;
use paperback_collections::web::middleware::cart_session;

pub const CART_A: &str = "AAAAAAAAAAAAAAAAAAAAAA";
pub const CART_B: &str = "BBBBBBBBBBBBBBBBBBBBBB";

/// Fresh in-memory database with the schema applied and nothing seeded.
pub async fn empty_pool() -> DbPool {
    let pool = db::connect_with_settings("sqlite::memory:", 1, 30)
        .await
        .unwrap();
    db::run_migrations(&pool).await.unwrap();
    pool
}

/// Fresh in-memory database seeded with the embedded catalog (ids 1..=24).
pub async fn seeded_pool() -> DbPool {
    let pool = empty_pool().await;
    let repo = SqliteProductRepository::new(Arc::new(pool.clone()));
    refresh_catalog(&repo, parse_catalog(EMBEDDED_CATALOG).unwrap())
        .await
        .unwrap();
    pool
}

pub async fn count(pool: &DbPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_cart_line(pool: &DbPool, cart_key: &str, product_id: i64, quantity: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO cart_lines (cart_key, product_id, quantity) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(cart_key)
    .bind(product_id)
    .bind(quantity)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn create_test_state(pool: DbPool) -> AppState {
    AppState::new(Arc::new(pool), false)
}

/// Storefront and API routes with the cart session, without rate limiting
/// (the limiter needs a peer address the test transport does not provide).
pub fn test_app(state: AppState) -> Router {
    let web_router = Router::new()
        .merge(web::routes::public_routes())
        .merge(web::routes::mutating_routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            cart_session::layer,
        ));

    Router::new()
        .merge(web_router)
        .nest("/api", api::routes::routes())
        .fallback(web::handlers::not_found_handler)
        .with_state(state)
}

/// Test server that keeps cookies between requests, like a browser.
pub async fn browser() -> (TestServer, DbPool) {
    let pool = seeded_pool().await;
    let app = test_app(create_test_state(pool.clone()));
    let server = TestServer::builder().save_cookies().build(app).unwrap();
    (server, pool)
}

/// Another cookie-keeping client against an existing database.
pub fn browser_on(pool: &DbPool) -> TestServer {
    let app = test_app(create_test_state(pool.clone()));
    TestServer::builder().save_cookies().build(app).unwrap()
}

/// The production router (rate limiter, `/static`, path normalization)
/// served over a real socket so the limiter sees a peer address.
pub fn served_app(pool: &DbPool) -> TestServer {
    let app = ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(
        app_router(create_test_state(pool.clone())),
    );
    TestServer::builder()
        .http_transport()
        .save_cookies()
        .build(app)
        .unwrap()
}
