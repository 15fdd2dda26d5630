//! Integration tests for the item pages.

mod common;

use axum::http::StatusCode;
use uuid::Uuid;

#[tokio::test]
async fn test_create_item_round_trip() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    let category_name = common::unique_name("Tools");
    let category_id = app.create_category(&category_name, "Hand tools").await;

    let item_name = common::unique_name("Hammer");
    let response = app
        .post_form(
            &format!("/category/{category_id}/create"),
            &[
                ("itemName", &item_name),
                ("description", "Claw hammer"),
                ("price", "9.50"),
                ("quantity", "3"),
            ],
        )
        .await;

    assert!(response.status.is_redirection());
    let location = response.location.expect("redirect location");
    assert!(location.starts_with("/category/item/"));

    let detail = app.get(&location).await;
    assert_eq!(detail.status, StatusCode::OK);
    assert!(detail.body.contains(&item_name));
    assert!(detail.body.contains("Claw hammer"));
    assert!(detail.body.contains(&category_name));
    assert!(detail.body.contains("9.5"));
    assert!(detail.body.contains("3"));
}

#[tokio::test]
async fn test_create_rejects_zero_quantity() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    let category_id = app
        .create_category(&common::unique_name("Tools"), "Hand tools")
        .await;

    let item_name = common::unique_name("Chisel");
    let response = app
        .post_form(
            &format!("/category/{category_id}/create"),
            &[
                ("itemName", &item_name),
                ("description", "Wood chisel"),
                ("price", "4.00"),
                ("quantity", "0"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Quantity must be a positive integer."));
    assert_eq!(app.count_items_named(&item_name).await, 0);
}

#[tokio::test]
async fn test_create_rejects_fractional_quantity() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    let category_id = app
        .create_category(&common::unique_name("Tools"), "Hand tools")
        .await;

    let response = app
        .post_form(
            &format!("/category/{category_id}/create"),
            &[
                ("itemName", &common::unique_name("Rasp")),
                ("description", "Flat rasp"),
                ("price", "4.00"),
                ("quantity", "2.5"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Quantity must be a positive integer."));
}

#[tokio::test]
async fn test_create_rejects_non_numeric_price() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    let category_id = app
        .create_category(&common::unique_name("Tools"), "Hand tools")
        .await;

    let response = app
        .post_form(
            &format!("/category/{category_id}/create"),
            &[
                ("itemName", &common::unique_name("File")),
                ("description", "Mill file"),
                ("price", "cheap"),
                ("quantity", "1"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Price must be a numeric value."));
}

#[tokio::test]
async fn test_create_duplicate_name_rejected() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    let category_id = app
        .create_category(&common::unique_name("Tools"), "Hand tools")
        .await;
    let item_name = common::unique_name("Level");
    app.create_item(category_id, &item_name, "19.00", "2").await;

    let response = app
        .post_form(
            &format!("/category/{category_id}/create"),
            &[
                ("itemName", &item_name),
                ("description", "Spirit level"),
                ("price", "19.00"),
                ("quantity", "2"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Item with the same name already exists."));
    assert_eq!(app.count_items_named(&item_name).await, 1);
}

#[tokio::test]
async fn test_update_to_missing_category_succeeds_then_detail_404s() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    let category_id = app
        .create_category(&common::unique_name("Tools"), "Hand tools")
        .await;
    let item_name = common::unique_name("Square");
    let item_id = app.create_item(category_id, &item_name, "7.25", "1").await;

    // Re-assign to a category id that does not exist. No existence check
    // runs on this path, so the update goes through.
    let response = app
        .post_form(
            &format!("/category/item/{item_id}/update"),
            &[
                ("itemName", &item_name),
                ("description", "Framing square"),
                ("price", "7.25"),
                ("quantity", "1"),
                ("categoryID", &Uuid::new_v4().to_string()),
            ],
        )
        .await;

    assert!(response.status.is_redirection());
    assert_eq!(
        response.location.as_deref(),
        Some(&*format!("/category/item/{item_id}"))
    );

    // The item row still resolves; its category reference does not.
    let detail = app.get(&format!("/category/item/{item_id}")).await;
    assert_eq!(detail.status, StatusCode::NOT_FOUND);
    assert!(detail.body.contains("Category not found"));
    assert!(!detail.body.contains("Item not found"));
}

#[tokio::test]
async fn test_update_form_carries_hidden_category_id() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    let category_id = app
        .create_category(&common::unique_name("Tools"), "Hand tools")
        .await;
    let item_id = app
        .create_item(category_id, &common::unique_name("Clamp"), "6.00", "8")
        .await;

    let form = app.get(&format!("/category/item/{item_id}/update")).await;
    assert_eq!(form.status, StatusCode::OK);
    assert!(form.body.contains("name=\"categoryID\""));
    assert!(form.body.contains(&category_id.to_string()));
}

#[tokio::test]
async fn test_detail_of_missing_item_is_404() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    let response = app.get(&format!("/category/item/{}", Uuid::new_v4())).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("Item not found"));
}

#[tokio::test]
async fn test_delete_missing_item_redirects_to_list() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    let response = app
        .post_form(&format!("/category/item/{}/delete", Uuid::new_v4()), &[])
        .await;
    assert!(response.status.is_redirection());
    assert_eq!(response.location.as_deref(), Some("/"));
}

#[tokio::test]
async fn test_delete_item_redirects_to_owning_category() {
    let Some(app) = common::TestApp::new().await else {
        return;
    };

    let category_id = app
        .create_category(&common::unique_name("Tools"), "Hand tools")
        .await;
    let item_name = common::unique_name("Punch");
    let item_id = app.create_item(category_id, &item_name, "3.00", "5").await;

    let confirm = app.get(&format!("/category/item/{item_id}/delete")).await;
    assert_eq!(confirm.status, StatusCode::OK);
    assert!(confirm.body.contains(&item_name));

    let response = app
        .post_form(&format!("/category/item/{item_id}/delete"), &[])
        .await;

    assert!(response.status.is_redirection());
    assert_eq!(
        response.location.as_deref(),
        Some(&*format!("/category/{category_id}"))
    );
    assert_eq!(app.count_items_named(&item_name).await, 0);
}
