mod common;

use serde_json::json;

use common::{assert_fail, assert_success, build_test_app};

#[tokio::test]
async fn upsert_overwrites_previous_position() {
    let app = build_test_app().await;
    let (user_id, token) = app.signed_in_user("devilXX", "123").await;
    let series = app
        .create_series(&token, "Mr. Robot", "http://photo/img.png")
        .await;
    let id = series["ID"].as_i64().unwrap();

    let first = app
        .post(
            "/api/v1/last-watched",
            Some(&token),
            json!({ "SeriesID": id, "Session": 1, "Episode": 3 }),
        )
        .await;
    assert_success(&first);
    assert_eq!(
        first["Data"],
        json!({ "UserID": user_id, "SeriesID": id, "Session": 1, "Episode": 3 })
    );

    let second = app
        .post(
            "/api/v1/last-watched",
            Some(&token),
            json!({ "SeriesID": id, "Session": 2, "Episode": 1 }),
        )
        .await;
    assert_eq!(second["Data"]["Session"], 2);
    assert_eq!(second["Data"]["Episode"], 1);

    let list = app.get("/api/v1/last-watched", Some(&token)).await;
    assert_eq!(list["Data"], json!([second["Data"].clone()]));
}

#[tokio::test]
async fn positions_are_private_to_each_user() {
    let app = build_test_app().await;
    let (_, alice) = app.signed_in_user("alice", "pw").await;
    let (_, bob) = app.signed_in_user("bob", "pw").await;
    let series = app.create_series(&alice, "Dark", "http://photo/dark.png").await;
    let id = series["ID"].as_i64().unwrap();

    app.post(
        "/api/v1/last-watched",
        Some(&alice),
        json!({ "SeriesID": id, "Session": 3, "Episode": 8 }),
    )
    .await;

    let list = app.get("/api/v1/last-watched", Some(&bob)).await;
    assert_eq!(list["Data"], json!([]));
}

#[tokio::test]
async fn upsert_rejects_bad_input() {
    let app = build_test_app().await;
    let (_, token) = app.signed_in_user("devilXX", "123").await;

    let json = app
        .post(
            "/api/v1/last-watched",
            Some(&token),
            json!({ "SeriesID": 9, "Session": 1, "Episode": 1 }),
        )
        .await;
    assert_eq!(assert_fail(&json), "Series 9 not found");

    let json = app
        .post(
            "/api/v1/last-watched",
            Some(&token),
            json!({ "SeriesID": 9, "Session": 1 }),
        )
        .await;
    assert_eq!(assert_fail(&json), "Episode is missing");

    let json = app
        .post(
            "/api/v1/last-watched",
            Some(&token),
            json!({ "SeriesID": 9, "Session": "one", "Episode": 1 }),
        )
        .await;
    assert_eq!(assert_fail(&json), "Wrong value in Session");
}
