mod common;

use axum::http::StatusCode;

const VALID_FORM: [(&str, &str); 3] = [
    ("name", "Jane Doe"),
    ("address", "1 Main St"),
    ("email", "jane@example.com"),
];

#[tokio::test]
async fn test_checkout_form_shows_cart_summary() {
    let (server, _pool) = common::browser().await;
    server.get("/add-to-cart/1").await;

    let response = server.get("/checkout").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Order summary"));
    assert!(html.contains("Total:"));
    assert!(html.contains("name=\"email\""));
}

#[tokio::test]
async fn test_valid_checkout_places_order_and_clears_cart() {
    let (server, pool) = common::browser().await;
    server.post("/add-to-cart/3").form(&[("quantity", "2")]).await;
    server.post("/add-to-cart/1").form(&[("quantity", "1")]).await;

    let response = server.post("/checkout").form(&VALID_FORM).await;

    response.assert_status(StatusCode::SEE_OTHER);
    let location = response.header("location");
    let location = location.to_str().unwrap().to_string();
    assert!(location.starts_with("/checkout/success/"));

    assert_eq!(common::count(&pool, "orders").await, 1);
    assert_eq!(common::count(&pool, "order_lines").await, 2);
    assert_eq!(common::count(&pool, "cart_lines").await, 0);

    let (name, address, email): (String, String, String) = sqlx::query_as(
        "SELECT customer_name, customer_address, customer_email FROM orders",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(name, "Jane Doe");
    assert_eq!(address, "1 Main St");
    assert_eq!(email, "jane@example.com");

    let success = server.get(&location).await;
    success.assert_status_ok();
    let html = success.text();
    assert!(html.contains("Thank you, Jane Doe!"));
    assert!(html.contains("3 item(s)"));

    assert!(server.get("/basket").await.text().contains("Your basket is empty."));
}

#[tokio::test]
async fn test_checkout_trims_contact_fields() {
    let (server, pool) = common::browser().await;
    server.get("/add-to-cart/1").await;

    server
        .post("/checkout")
        .form(&[
            ("name", "  Jane Doe "),
            ("address", " 1 Main St "),
            ("email", " jane@example.com "),
        ])
        .await
        .assert_status(StatusCode::SEE_OTHER);

    let name: String = sqlx::query_scalar("SELECT customer_name FROM orders")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(name, "Jane Doe");
}

#[tokio::test]
async fn test_empty_name_rerenders_form() {
    let (server, pool) = common::browser().await;
    server.get("/add-to-cart/1").await;

    let response = server
        .post("/checkout")
        .form(&[
            ("name", "   "),
            ("address", "1 Main St"),
            ("email", "jane@example.com"),
        ])
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let html = response.text();
    assert!(html.contains("This field is required."));
    assert!(html.contains("value=\"jane@example.com\""));
    assert!(html.contains("Order summary"));

    assert_eq!(common::count(&pool, "orders").await, 0);
    assert_eq!(common::count(&pool, "cart_lines").await, 1);
}

#[tokio::test]
async fn test_invalid_email_rerenders_form() {
    let (server, pool) = common::browser().await;
    server.get("/add-to-cart/1").await;

    let response = server
        .post("/checkout")
        .form(&[
            ("name", "Jane Doe"),
            ("address", "1 Main St"),
            ("email", "not-an-email"),
        ])
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().contains("Invalid email address."));
    assert_eq!(common::count(&pool, "orders").await, 0);
    assert_eq!(common::count(&pool, "cart_lines").await, 1);
}

#[tokio::test]
async fn test_missing_fields_are_reported() {
    let (server, _pool) = common::browser().await;
    server.get("/add-to-cart/1").await;

    let response = server.post("/checkout").form(&[("name", "")]).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.text().matches("This field is required.").count(), 3);
}

#[tokio::test]
async fn test_empty_cart_checkout_is_rejected() {
    let (server, pool) = common::browser().await;

    let response = server.post("/checkout").form(&VALID_FORM).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().contains("Your cart is empty."));
    assert_eq!(common::count(&pool, "orders").await, 0);
}

#[tokio::test]
async fn test_checkout_success_unknown_order() {
    let (server, _pool) = common::browser().await;

    server
        .get("/checkout/success/999")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_checkout_success_hidden_from_other_visitors() {
    let (server, pool) = common::browser().await;
    server.get("/add-to-cart/1").await;
    let response = server.post("/checkout").form(&VALID_FORM).await;
    let location = response.header("location");
    let location = location.to_str().unwrap().to_string();

    server.get(&location).await.assert_status_ok();

    let stranger = common::browser_on(&pool);
    let response = stranger.get(&location).await;

    response.assert_status(StatusCode::NOT_FOUND);
    let html = response.text();
    assert!(!html.contains("Jane Doe"));
    assert!(!html.contains("1 Main St"));
}
