mod common;

use serde_json::json;

use common::{assert_fail, assert_success, build_test_app};

#[tokio::test]
async fn append_is_idempotent() {
    let app = build_test_app().await;
    let (_, owner) = app.signed_in_user("owner", "pw").await;
    let (_, follower) = app.signed_in_user("follower", "pw").await;
    let series = app
        .create_series(&owner, "Mr. Robot", "http://photo/img.png")
        .await;
    let id = series["ID"].as_i64().unwrap();

    for _ in 0..2 {
        let json = app
            .post("/api/v1/series-list", Some(&follower), json!({ "SeriesID": id }))
            .await;
        assert_success(&json);
        assert_eq!(json["Data"], "");
    }

    let list = app.get("/api/v1/series-list", Some(&follower)).await;
    assert_eq!(list["Data"], json!([series]));
}

#[tokio::test]
async fn list_keeps_insertion_order_per_user() {
    let app = build_test_app().await;
    let (_, token) = app.signed_in_user("devilXX", "123").await;
    let (_, other) = app.signed_in_user("other", "pw").await;

    let a = app.create_series(&token, "A", "http://photo/a.png").await;
    let b = app.create_series(&token, "B", "http://photo/b.png").await;

    let list = app.get("/api/v1/series-list", Some(&token)).await;
    assert_eq!(list["Data"], json!([a, b]));

    let empty = app.get("/api/v1/series-list", Some(&other)).await;
    assert_eq!(empty["Data"], json!([]));
}

#[tokio::test]
async fn numeric_ids_may_arrive_as_floats() {
    let app = build_test_app().await;
    let (_, token) = app.signed_in_user("devilXX", "123").await;
    let (_, follower) = app.signed_in_user("follower", "pw").await;
    let series = app.create_series(&token, "A", "http://photo/a.png").await;
    let id = series["ID"].as_i64().unwrap() as f64;

    let json = app
        .post("/api/v1/series-list", Some(&follower), json!({ "SeriesID": id }))
        .await;
    assert_success(&json);
}

#[tokio::test]
async fn append_rejects_bad_input() {
    let app = build_test_app().await;
    let (_, token) = app.signed_in_user("devilXX", "123").await;

    let json = app
        .post("/api/v1/series-list", Some(&token), json!({ "SeriesID": 42 }))
        .await;
    assert_eq!(assert_fail(&json), "Series 42 not found");

    let json = app
        .post("/api/v1/series-list", Some(&token), json!({ "SeriesID": "42" }))
        .await;
    assert_eq!(assert_fail(&json), "Wrong value in SeriesID");

    let json = app.post("/api/v1/series-list", Some(&token), json!({})).await;
    assert_eq!(assert_fail(&json), "SeriesID is missing");

    let json = app
        .post("/api/v1/series-list", None, json!({ "SeriesID": 1 }))
        .await;
    assert!(assert_fail(&json).starts_with("Unauthorized"));
}
