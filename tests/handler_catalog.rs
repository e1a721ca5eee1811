mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_home_lists_catalog() {
    let (server, _pool) = common::browser().await;

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("24 titles"));
    assert!(html.contains("Science Fiction"));
    assert!(html.contains("/product/24"));
}

#[tokio::test]
async fn test_first_visit_issues_cart_cookie() {
    let (server, _pool) = common::browser().await;

    let response = server.get("/").await;

    let cookie = response.header("set-cookie");
    let cookie = cookie.to_str().unwrap();
    assert!(cookie.starts_with("cart_id="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));

    let second = server.get("/").await;
    assert!(second.headers().get("set-cookie").is_none());
}

#[tokio::test]
async fn test_product_detail() {
    let (server, _pool) = common::browser().await;

    let response = server.get("/product/1").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("action=\"/add-to-cart/1\""));
    assert!(html.contains("name=\"quantity\""));
}

#[tokio::test]
async fn test_product_detail_not_found() {
    let (server, _pool) = common::browser().await;

    let response = server.get("/product/999").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("Product not found"));
}

#[tokio::test]
async fn test_malformed_ids_render_not_found_page() {
    let (server, pool) = common::browser().await;

    for path in ["/product/abc", "/add-to-cart/abc", "/remove-from-cart/x", "/checkout/success/x"] {
        let response = server.get(path).await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.text().contains("Page not found"), "{path}");
    }

    server
        .post("/add-to-cart/abc")
        .form(&[("quantity", "1")])
        .await
        .assert_status(StatusCode::NOT_FOUND);
    assert_eq!(common::count(&pool, "cart_lines").await, 0);
}

#[tokio::test]
async fn test_unknown_path_renders_not_found_page() {
    let (server, _pool) = common::browser().await;

    let response = server.get("/no-such-page").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("Page not found"));
}

#[tokio::test]
async fn test_api_products() {
    let (server, _pool) = common::browser().await;

    let response = server.get("/api/products").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 24);
    assert_eq!(json["items"][0]["id"], 1);
    assert!(json["items"][0]["price"].as_str().unwrap().starts_with('$'));
}

#[tokio::test]
async fn test_api_product_not_found_envelope() {
    let (server, _pool) = common::browser().await;

    let response = server.get("/api/products/999").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "Product not found");
    assert_eq!(json["error"]["details"]["id"], 999);
}
