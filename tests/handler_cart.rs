mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_add_to_cart_redirects_to_basket() {
    let (server, pool) = common::browser().await;

    let response = server
        .post("/add-to-cart/3")
        .form(&[("quantity", "2")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/basket");
    assert_eq!(common::count(&pool, "cart_lines").await, 1);

    let basket = server.get("/basket").await;
    basket.assert_status_ok();
    let html = basket.text();
    assert!(html.contains("/product/3"));
    assert!(html.contains("2 item(s)"));
}

#[tokio::test]
async fn test_add_link_adds_one() {
    let (server, _pool) = common::browser().await;

    server
        .get("/add-to-cart/1")
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let html = server.get("/basket").await.text();
    assert!(html.contains("1 item(s)"));
}

#[tokio::test]
async fn test_blank_quantity_defaults_to_one() {
    let (server, _pool) = common::browser().await;

    server
        .post("/add-to-cart/1")
        .form(&[("quantity", "")])
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let html = server.get("/basket").await.text();
    assert!(html.contains("1 item(s)"));
}

#[tokio::test]
async fn test_same_product_twice_gives_two_lines() {
    let (server, pool) = common::browser().await;

    server.get("/add-to-cart/5").await;
    server.get("/add-to-cart/5").await;

    assert_eq!(common::count(&pool, "cart_lines").await, 2);
    let html = server.get("/basket").await.text();
    assert_eq!(html.matches("action=\"/remove-from-cart/").count(), 2);
}

#[tokio::test]
async fn test_add_unknown_product_leaves_cart_unchanged() {
    let (server, pool) = common::browser().await;

    server.get("/add-to-cart/1").await;
    let response = server.get("/add-to-cart/999").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(common::count(&pool, "cart_lines").await, 1);
}

#[tokio::test]
async fn test_zero_quantity_is_rejected() {
    let (server, pool) = common::browser().await;

    let response = server
        .post("/add-to-cart/1")
        .form(&[("quantity", "0")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("Quantity must be at least 1."));
    assert_eq!(common::count(&pool, "cart_lines").await, 0);
}

#[tokio::test]
async fn test_oversized_quantity_is_rejected() {
    let (server, pool) = common::browser().await;

    let response = server
        .post("/add-to-cart/1")
        .form(&[("quantity", "9223372036854775807")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("Quantity cannot be more than 99."));
    assert_eq!(common::count(&pool, "cart_lines").await, 0);

    server.get("/basket").await.assert_status_ok();
    server.get("/checkout").await.assert_status_ok();
}

#[tokio::test]
async fn test_largest_quantity_is_accepted() {
    let (server, pool) = common::browser().await;

    server
        .post("/add-to-cart/1")
        .form(&[("quantity", "99")])
        .await
        .assert_status(StatusCode::SEE_OTHER);

    assert_eq!(common::count(&pool, "cart_lines").await, 1);
    server.get("/basket").await.assert_status_ok();
}

#[tokio::test]
async fn test_remove_from_cart() {
    let (server, pool) = common::browser().await;

    server.get("/add-to-cart/2").await;
    let line_id: i64 = sqlx::query_scalar("SELECT id FROM cart_lines")
        .fetch_one(&pool)
        .await
        .unwrap();

    let response = server.post(&format!("/remove-from-cart/{line_id}")).await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/basket");
    assert_eq!(common::count(&pool, "cart_lines").await, 0);

    let again = server.get(&format!("/remove-from-cart/{line_id}")).await;
    again.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_remove_nonexistent_line() {
    let (server, _pool) = common::browser().await;

    server
        .get("/remove-from-cart/12345")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_basket() {
    let (server, _pool) = common::browser().await;

    let response = server.get("/basket").await;

    response.assert_status_ok();
    assert!(response.text().contains("Your basket is empty."));
}

#[tokio::test]
async fn test_carts_are_isolated_between_visitors() {
    let (alice, pool) = common::browser().await;
    let bob = common::browser_on(&pool);

    alice.get("/add-to-cart/1").await;
    bob.get("/basket").await;

    assert!(bob.get("/basket").await.text().contains("Your basket is empty."));

    let line_id: i64 = sqlx::query_scalar("SELECT id FROM cart_lines")
        .fetch_one(&pool)
        .await
        .unwrap();
    bob.get(&format!("/remove-from-cart/{line_id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    assert_eq!(common::count(&pool, "cart_lines").await, 1);
}
