mod common;

use chrono::NaiveDate;
use std::sync::Arc;
use paperback_collections::domain::entities::NewProduct;
use paperback_collections::domain::repositories::ProductRepository;
use paperback_collections::infrastructure::persistence::SqliteProductRepository;

fn new_product(title: &str, category: &str) -> NewProduct {
    NewProduct {
        title: title.to_string(),
        author: "Test Author".to_string(),
        price_cents: 1000,
        description: "Test description".to_string(),
        isbn: "978-0000000000".to_string(),
        category: category.to_string(),
        image: "https://example.com/cover.jpg".to_string(),
        publisher: "Test Press".to_string(),
        published_on: NaiveDate::from_ymd_opt(2024, 5, 21).unwrap(),
        rating: None,
        reviews: None,
    }
}

#[tokio::test]
async fn test_seeded_catalog_lists_every_entry_once() {
    let pool = common::seeded_pool().await;
    let repo = SqliteProductRepository::new(Arc::new(pool));

    let products = repo.list().await.unwrap();

    assert_eq!(products.len(), 24);
    let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, (1..=24).collect::<Vec<_>>());

    let maids = products.iter().filter(|p| p.title == "The Maid").count();
    assert!(maids > 1, "repeated titles are separate entries");
}

#[tokio::test]
async fn test_find_by_id() {
    let pool = common::seeded_pool().await;
    let repo = SqliteProductRepository::new(Arc::new(pool));

    let product = repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(product.id, 1);
    assert!(!product.title.is_empty());

    assert!(repo.find_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_unbounded_rating_round_trips() {
    let pool = common::seeded_pool().await;
    let repo = SqliteProductRepository::new(Arc::new(pool));

    let products = repo.list().await.unwrap();
    let darker = products
        .iter()
        .find(|p| p.title == "You Like It Darker: Stories")
        .unwrap();

    assert_eq!(darker.rating, Some(5.5));
    assert_eq!(darker.display_price(), "$18.90");
}

#[tokio::test]
async fn test_replace_all_replaces_instead_of_appending() {
    let pool = common::seeded_pool().await;
    let repo = SqliteProductRepository::new(Arc::new(pool.clone()));

    let inserted = repo
        .replace_all(vec![
            new_product("First", "Fiction"),
            new_product("Second", "Biography"),
        ])
        .await
        .unwrap();

    assert_eq!(inserted, 2);
    assert_eq!(repo.count().await.unwrap(), 2);

    let products = repo.list().await.unwrap();
    assert_eq!(products[0].id, 1);
    assert_eq!(products[0].title, "First");
    assert_eq!(products[1].id, 2);
    assert_eq!(products[1].rating, None);
}

#[tokio::test]
async fn test_replace_all_drops_cart_lines_and_keeps_orders() {
    let pool = common::seeded_pool().await;
    common::insert_cart_line(&pool, common::CART_A, 1, 2).await;
    sqlx::query(
        "INSERT INTO orders (customer_name, customer_address, customer_email) VALUES ('A', 'B', 'a@example.com')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let repo = SqliteProductRepository::new(Arc::new(pool.clone()));
    repo.replace_all(vec![new_product("Only", "Fiction")])
        .await
        .unwrap();

    assert_eq!(common::count(&pool, "cart_lines").await, 0);
    assert_eq!(common::count(&pool, "orders").await, 1);
}
