//! Products table: create, edit and remove through the HTTP surface.

use axum::http::StatusCode;

use singsing_admin::config::{AdminConfig, CatalogSettings};
use singsing_core::IdStrategy;
use singsing_integration_tests::{TestClient, TestResponse};

/// The opening tag of the input with `dom_id`.
fn input_tag<'a>(page: &'a TestResponse, dom_id: &str) -> &'a str {
    let marker = format!("id=\"{dom_id}\"");
    let start = page.body.find(&marker).expect("input present");
    let rest = page.body.get(start..).unwrap_or_default();
    let end = rest.find('>').unwrap_or(rest.len());
    rest.get(..end).unwrap_or_default()
}

async fn edit_row(
    client: &mut TestClient,
    position: usize,
    expected_id: &str,
    fields: [&str; 6],
) -> TestResponse {
    let [id, quantity, name, category, stock, price] = fields;
    client
        .post_form(
            &format!("/products/{position}"),
            &[
                ("expected_id", expected_id),
                ("id", id),
                ("quantity", quantity),
                ("name", name),
                ("category", category),
                ("stock", stock),
                ("price", price),
            ],
        )
        .await
}

#[tokio::test]
async fn test_products_page_shows_seed_rows() {
    let mut client = TestClient::new();
    let page = client.get("/products").await;

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.product_rows(), 10);
    assert!(page.body.contains("data-page=\"products\""));
    assert!(page.body.contains("<td>0001</td>"));
    assert!(page.body.contains("<td>0010</td>"));
    assert!(page.body.contains("10 items"));
    assert!(!page.has_modal());
    // Viewing does not start a session.
    assert!(!client.has_session());
}

#[tokio::test]
async fn test_create_with_blank_id_gets_next_code() {
    let mut client = TestClient::new();

    let response = client.create_product("", "Kimchi", "").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/products"));

    let page = client.get("/products").await;
    assert_eq!(page.product_rows(), 11);
    assert!(page.body.contains("<td>0011</td>"));
    assert!(page.body.contains("<td>Kimchi</td>"));
    assert!(page.body.contains("<td>Uncategorized</td>"));
    assert!(page.body.contains("<td>0.00</td>"));
    assert!(page.body.contains("data-position=\"10\""));
}

#[tokio::test]
async fn test_create_normalizes_price() {
    let mut client = TestClient::new();
    client.create_product("0100", "Gochujang", " 12.345 ").await;

    let page = client.get("/products").await;
    assert!(page.body.contains("<td>12.35</td>"));
}

#[tokio::test]
async fn test_create_form_placeholder_shows_next_code() {
    let mut client = TestClient::new();
    let page = client.get("/products/new").await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.has_modal());
    assert!(page.body.contains("Create New Item"));
    assert!(input_tag(&page, "nid").contains("placeholder=\"e.g. 0011\""));
    assert!(input_tag(&page, "nprice").contains("value=\"0.00\""));
    assert_eq!(page.product_rows(), 10);
}

#[tokio::test]
async fn test_duplicate_id_rejected_with_alert() {
    let mut client = TestClient::new();

    let page = client.create_product("0001", "Shin Black", "5").await;

    assert_eq!(page.status, StatusCode::CONFLICT);
    assert!(page.has_modal());
    assert!(page.body.contains("role=\"alert\""));
    assert!(page.body.contains("already exists. Please choose a different ID."));
    assert!(input_tag(&page, "nid").contains("autofocus"));
    // The submitted values stay in the open form.
    assert!(input_tag(&page, "nname").contains("value=\"Shin Black\""));
    assert_eq!(page.product_rows(), 10);

    let page = client.get("/products").await;
    assert_eq!(page.product_rows(), 10);
}

#[tokio::test]
async fn test_blank_name_rejected_silently() {
    let mut client = TestClient::new();

    for name in ["", "   "] {
        let page = client.create_product("0500", name, "1").await;
        assert_eq!(page.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(page.has_modal());
        assert!(!page.body.contains("role=\"alert\""));
        assert!(input_tag(&page, "nname").contains("autofocus"));
        assert_eq!(page.product_rows(), 10);
    }
}

#[tokio::test]
async fn test_edit_form_prefilled() {
    let mut client = TestClient::new();
    let page = client.get("/products/1/edit").await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Edit Item"));
    assert!(page.body.contains("action=\"/products/1\""));
    assert!(input_tag(&page, "eid").contains("value=\"0002\""));
    assert!(
        page.body
            .contains("<input type=\"hidden\" name=\"expected_id\" value=\"0002\">")
    );
}

#[tokio::test]
async fn test_edit_with_blank_name_is_accepted() {
    let mut client = TestClient::new();

    let response = edit_row(
        &mut client,
        0,
        "0001",
        ["0001", "00", "", "Noodles & Instant Meals", "00", "00.00"],
    )
    .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let page = client.get("/products").await;
    assert_eq!(page.product_rows(), 10);
    assert!(page.body.contains("<td></td>"));
}

#[tokio::test]
async fn test_edit_stores_values_verbatim() {
    let mut client = TestClient::new();

    edit_row(&mut client, 4, "0005", ["0002", "lots", "Jin Ramen", " Misc ", "", "3.5"]).await;

    let page = client.get("/products").await;
    assert_eq!(page.product_rows(), 10);
    assert!(page.body.contains("<td>lots</td>"));
    assert!(page.body.contains("<td> Misc </td>"));
    assert!(page.body.contains("<td>3.5</td>"));
    // Duplicate code accepted on edit.
    assert_eq!(page.body.matches("<td>0002</td>").count(), 2);
}

#[tokio::test]
async fn test_validated_edits_reject_blank_name() {
    let config = AdminConfig {
        catalog: CatalogSettings {
            validate_edits: true,
            ..CatalogSettings::default()
        },
        ..AdminConfig::default()
    };
    let mut client = TestClient::with_config(config);

    let page = edit_row(&mut client, 0, "0001", ["0001", "0", " ", "Rice", "0", "1"]).await;
    assert_eq!(page.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(input_tag(&page, "ename").contains("autofocus"));

    let page = edit_row(&mut client, 0, "0001", ["0002", "0", "Shin", "Rice", "0", "1"]).await;
    assert_eq!(page.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_remove_requires_confirmation() {
    let mut client = TestClient::new();
    let before = client.get("/products").await;

    let confirm = client.get("/products/2/remove").await;
    assert_eq!(confirm.status, StatusCode::OK);
    assert!(confirm.body.contains("Are you sure you want to remove this item?"));
    assert!(confirm.body.contains("action=\"/products/2/remove\""));
    assert!(confirm.body.contains("name=\"expected_id\" value=\"0003\""));
    assert_eq!(confirm.product_rows(), 10);

    // Cancel goes back to the table; nothing changed.
    let after_cancel = client.get("/products").await;
    assert_eq!(after_cancel.body, before.body);

    let response = client.remove_product(2, "0003").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let page = client.get("/products").await;
    assert_eq!(page.product_rows(), 9);
    assert!(!page.body.contains("<td>0003</td>"));
    assert!(page.body.contains("<td>0002</td>"));
    assert!(page.body.contains("<td>0004</td>"));
}

#[tokio::test]
async fn test_out_of_range_positions() {
    let mut client = TestClient::new();

    assert_eq!(client.get("/products/10/edit").await.status, StatusCode::NOT_FOUND);
    assert_eq!(client.get("/products/10/remove").await.status, StatusCode::NOT_FOUND);
    let response = client.remove_product(99, "0001").await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(client.get("/products").await.product_rows(), 10);
}

#[tokio::test]
async fn test_non_numeric_position_is_bad_request() {
    let mut client = TestClient::new();
    assert_eq!(client.get("/products/abc/edit").await.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_max_plus_one_default_after_delete() {
    let mut client = TestClient::new();
    client.remove_product(0, "0001").await;

    let response = client.create_product("", "Kimchi", "").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let page = client.get("/products").await;
    assert_eq!(page.product_rows(), 10);
    assert!(page.body.contains("<td>0011</td>"));
}

#[tokio::test]
async fn test_row_count_default_collides_after_delete() {
    let config = AdminConfig {
        catalog: CatalogSettings {
            id_strategy: IdStrategy::RowCount,
            validate_edits: false,
        },
        ..AdminConfig::default()
    };
    let mut client = TestClient::with_config(config);
    client.remove_product(0, "0001").await;

    let page = client.create_product("", "Kimchi", "").await;
    assert_eq!(page.status, StatusCode::CONFLICT);
    assert!(page.body.contains("0010"));
    assert_eq!(page.product_rows(), 9);
}

#[tokio::test]
async fn test_reset_restores_seed_rows() {
    let mut client = TestClient::new();
    client.remove_product(0, "0001").await;
    client.remove_product(0, "0002").await;
    assert_eq!(client.get("/products").await.product_rows(), 8);

    let response = client.post_form("/products/reset", &[]).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(client.get("/products").await.product_rows(), 10);
}

#[tokio::test]
async fn test_empty_catalog_shows_empty_state() {
    let mut client = TestClient::new();
    for n in 1..=10 {
        let response = client.remove_product(0, &format!("{n:04}")).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER);
    }

    let page = client.get("/products").await;
    assert_eq!(page.product_rows(), 0);
    assert!(page.body.contains("No products yet"));
    assert!(page.body.contains("0 items"));
}

#[tokio::test]
async fn test_sessions_have_separate_catalogs() {
    let mut first = TestClient::new();
    let mut second = first.fresh_client();

    first.create_product("", "Kimchi", "").await;

    assert_eq!(first.get("/products").await.product_rows(), 11);
    assert_eq!(second.get("/products").await.product_rows(), 10);
}

#[tokio::test]
async fn test_stale_edit_does_not_overwrite_shifted_row() {
    let mut client = TestClient::new();
    let form = client.get("/products/2/edit").await;
    assert!(input_tag(&form, "eid").contains("value=\"0003\""));

    // Another tab removes the first row; 0004 moves into position 2.
    client.remove_product(0, "0001").await;

    let page = edit_row(
        &mut client,
        2,
        "0003",
        ["0003", "1", "Neoguri Mild", "Noodles", "1", "1.00"],
    )
    .await;
    assert_eq!(page.status, StatusCode::CONFLICT);
    assert!(page.has_modal());
    assert!(page.body.contains("changed or was removed"));
    // The form reopens on 0003 at its new position with the submitted values.
    assert!(page.body.contains("action=\"/products/1\""));
    assert!(input_tag(&page, "ename").contains("value=\"Neoguri Mild\""));

    let table = client.get("/products").await;
    assert_eq!(table.product_rows(), 9);
    assert!(table.body.contains("<td>0004</td>"));
    assert_eq!(table.body.matches("<td>0003</td>").count(), 1);
    assert!(!table.body.contains("Neoguri Mild"));
}

#[tokio::test]
async fn test_resubmitted_removal_removes_only_confirmed_row() {
    let mut client = TestClient::new();

    let first = client.remove_product(2, "0003").await;
    assert_eq!(first.status, StatusCode::SEE_OTHER);

    let again = client.remove_product(2, "0003").await;
    assert_eq!(again.status, StatusCode::CONFLICT);
    assert!(!again.has_modal());
    assert!(again.body.contains("role=\"alert\""));

    let table = client.get("/products").await;
    assert_eq!(table.product_rows(), 9);
    assert!(!table.body.contains("<td>0003</td>"));
    assert!(table.body.contains("<td>0004</td>"));
}

#[tokio::test]
async fn test_edit_without_row_code_is_refused() {
    let mut client = TestClient::new();
    let response = client
        .post_form("/products/0", &[("id", "0001"), ("name", "Shin")])
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

    let table = client.get("/products").await;
    assert!(!table.body.contains("<td>Shin</td>"));
}

#[tokio::test]
async fn test_products_table_pages_by_fifty() {
    let mut client = TestClient::new();
    for n in 11..=55 {
        let response = client.create_product(&format!("{n:04}"), "Bulk Item", "1").await;
        assert_eq!(response.status, StatusCode::SEE_OTHER);
    }

    let first = client.get("/products").await;
    assert_eq!(first.product_rows(), 50);
    assert!(first.body.contains("55 items"));
    assert!(first.body.contains("Page 1 of 2"));
    assert!(first.body.contains("href=\"/products?page=2\""));

    let second = client.get("/products?page=2").await;
    assert_eq!(second.product_rows(), 5);
    assert!(second.body.contains("data-position=\"50\""));
    assert!(second.body.contains("<td>0055</td>"));

    // Out-of-range pages show the last page; junk shows the first.
    assert_eq!(client.get("/products?page=9").await.product_rows(), 5);
    assert_eq!(client.get("/products?page=abc").await.product_rows(), 50);

    // Creating a row on the second page redirects there.
    let response = client.create_product("", "Kimchi", "").await;
    assert_eq!(response.location.as_deref(), Some("/products?page=2"));
}
