//! Promotions grid, category tabs and detail panel.

use axum::http::StatusCode;

use singsing_integration_tests::TestClient;

#[tokio::test]
async fn test_all_promotions_listed() {
    let mut client = TestClient::new();
    let page = client.get("/promotions").await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("data-id=\"ramen1\""));
    assert!(page.body.contains("data-id=\"shabu1\""));
    assert!(page.body.contains("₱ 30.00"));
    assert!(page.body.contains("₱ 2000.00"));
    assert!(page.body.contains("In stock (10)"));
    assert!(page.body.contains("Out of stock"));
    assert!(!page.body.contains("id=\"promoDetail\""));
    assert!(page.body.contains("class=\"promo-tab active\" href=\"/promotions?category=all\""));
}

#[tokio::test]
async fn test_category_filter() {
    let mut client = TestClient::new();
    let page = client.get("/promotions?category=shabu").await;

    assert!(page.body.contains("data-id=\"shabu1\""));
    assert!(!page.body.contains("data-id=\"ramen1\""));
    assert!(page.body.contains("class=\"promo-tab active\" href=\"/promotions?category=shabu\""));
}

#[tokio::test]
async fn test_unknown_category_is_empty() {
    let mut client = TestClient::new();
    let page = client.get("/promotions?category=sushi").await;
    assert!(page.body.contains("No promotions in this category."));
}

#[tokio::test]
async fn test_detail_panel() {
    let mut client = TestClient::new();
    let page = client.get("/promotions?category=all&item=ramen1").await;

    assert!(page.body.contains("id=\"promoDetail\""));
    assert!(page.body.contains("<li>4 x Shin Cup</li>"));
    assert!(page.body.contains("<li>1 x Kimchi</li>"));
    assert!(page.body.contains("<dd id=\"detailSubtotal\">₱ 30.00</dd>"));
    assert!(page.body.contains("<dd id=\"detailTotal\">₱ 30.00</dd>"));
}

#[tokio::test]
async fn test_switching_category_hides_detail() {
    let mut client = TestClient::new();
    let page = client.get("/promotions?category=shabu&item=ramen1").await;
    assert!(!page.body.contains("id=\"promoDetail\""));
}
