//! Integration tests for progress snapshots.

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_progress_round_trip() {
    let app = common::build_test_app();

    // POST /api/progress
    let (status, json) = common::post_json(
        &app,
        "/api/progress",
        &serde_json::json!({
            "userId": "test-user",
            "role": "investigator",
            "storySegment": 1,
            "selectedChoice": "search"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["recordedAt"], "2026-08-07T21:00:00Z");

    // GET /api/progress/{user_id} — verify the stored snapshot.
    let (status, json) = common::get_json(&app, "/api/progress/test-user").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["userId"], "test-user");
    assert_eq!(json["role"], "investigator");
    assert_eq!(json["storySegment"], 1);
    assert_eq!(json["selectedChoice"], "search");
}

#[tokio::test]
async fn test_latest_snapshot_wins() {
    let app = common::build_test_app();

    for segment in [1, 2] {
        let (status, _) = common::post_json(
            &app,
            "/api/progress",
            &serde_json::json!({
                "userId": "walker",
                "role": "murderer",
                "storySegment": segment
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, json) = common::get_json(&app, "/api/progress/walker").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["storySegment"], 2);
    assert_eq!(json["selectedChoice"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_unknown_user_returns_404() {
    let app = common::build_test_app();

    let (status, json) = common::get_json(&app, "/api/progress/nobody").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");
}

#[tokio::test]
async fn test_negative_segment_is_rejected() {
    let app = common::build_test_app();

    let (status, json) = common::post_json(
        &app,
        "/api/progress",
        &serde_json::json!({
            "userId": "test-user",
            "role": "investigator",
            "storySegment": -1
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn test_blank_user_id_is_rejected() {
    let app = common::build_test_app();

    let (status, json) = common::post_json(
        &app,
        "/api/progress",
        &serde_json::json!({
            "userId": "  ",
            "role": "investigator",
            "storySegment": 0
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn test_missing_fields_return_422() {
    let app = common::build_test_app();

    // Axum returns 422 for deserialization failures.
    let (status, _) = common::post_json(&app, "/api/progress", &serde_json::json!({})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
