//! Integration tests for the interaction log endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;

#[tokio::test]
async fn high_rating_interaction_is_logged() {
    let app = common::build_test_app().await;

    let response = post_json(
        &app.router,
        "/api/interaction",
        json!({ "business_id": "cafe-1", "rating": 5, "action": "redirected_to_gmb" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "success": true }));

    let list = body_json(get(&app.router, "/api/interactions").await).await;
    let data = list["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["business_id"], "cafe-1");
    assert_eq!(data[0]["rating"], 5);
    assert_eq!(data[0]["action"], "redirected_to_gmb");
    assert!(data[0]["timestamp"].is_string());
}

#[tokio::test]
async fn every_rating_is_logged_regardless_of_outcome() {
    let app = common::build_test_app().await;

    for (rating, action) in [
        (1, "shown_feedback_form"),
        (3, "shown_feedback_form"),
        (4, "redirected_to_gmb"),
    ] {
        let response = post_json(
            &app.router,
            "/api/interaction",
            json!({ "business_id": "barber-7", "rating": rating, "action": action }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let list = body_json(get(&app.router, "/api/interactions?business=barber-7").await).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 3);

    let other = body_json(get(&app.router, "/api/interactions?business=cafe-1").await).await;
    assert!(other["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn out_of_range_rating_is_rejected() {
    let app = common::build_test_app().await;

    let response = post_json(
        &app.router,
        "/api/interaction",
        json!({ "business_id": "cafe-1", "rating": 6, "action": "redirected_to_gmb" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn action_contradicting_rating_is_rejected() {
    let app = common::build_test_app().await;

    let response = post_json(
        &app.router,
        "/api/interaction",
        json!({ "business_id": "cafe-1", "rating": 2, "action": "redirected_to_gmb" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let list = body_json(get(&app.router, "/api/interactions").await).await;
    assert!(list["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_action_is_rejected() {
    let app = common::build_test_app().await;

    let response = post_json(
        &app.router,
        "/api/interaction",
        json!({ "business_id": "cafe-1", "rating": 2, "action": "clicked" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn blank_business_filter_is_bad_request() {
    let app = common::build_test_app().await;
    let response = get(&app.router, "/api/interactions?business=").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
