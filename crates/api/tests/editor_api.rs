//! End-to-end tests for editor sessions: two-click painting, toggle-off,
//! hover preview and cancellation.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, build_app_with, delete, get, post_json, test_state};
use serde_json::{json, Value};

const BASE: &str = "/api/v1/scopes/villa-sol/years/2026";

/// App with one empty "High" season and an open editor session.
async fn setup() -> (Router, String) {
    let app = build_app_with(test_state());

    let response = post_json(app.clone(), &format!("{BASE}/seasons"), json!({ "name": "High" })).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(app.clone(), &format!("{BASE}/editor"), json!({})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    (app, id)
}

async fn event(app: &Router, id: &str, body: Value) -> Value {
    let response = post_json(app.clone(), &format!("/api/v1/editor/{id}/events"), body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"].clone()
}

async fn select_high(app: &Router, id: &str) {
    event(app, id, json!({ "type": "select_season", "season_id": "2026-high" })).await;
}

#[tokio::test]
async fn open_session_starts_idle() {
    let (app, id) = setup().await;

    let json = body_json(get(app.clone(), &format!("/api/v1/editor/{id}")).await).await;

    assert_eq!(json["data"]["scope"], "villa-sol");
    assert_eq!(json["data"]["selection"]["year"], 2026);
    assert_eq!(json["data"]["selection"]["selected_season_id"], Value::Null);
    assert_eq!(json["data"]["selection"]["state"], json!({ "state": "idle" }));

    let health = body_json(get(app, "/health").await).await;
    assert_eq!(health["editor_sessions"], 1);
}

#[tokio::test]
async fn click_without_selected_season_does_nothing() {
    let (app, id) = setup().await;

    let data = event(&app, &id, json!({ "type": "click", "day": "2026-07-01" })).await;

    assert_eq!(data["effect"], json!({ "type": "none" }));
    assert!(data.get("changes").is_none());
}

#[tokio::test]
async fn two_clicks_paint_the_span() {
    let (app, id) = setup().await;
    select_high(&app, &id).await;

    let first = event(&app, &id, json!({ "type": "click", "day": "2026-07-10" })).await;
    assert_eq!(
        first["effect"],
        json!({ "type": "anchor_placed", "day": "2026-07-10" })
    );
    assert_eq!(
        first["selection"]["state"],
        json!({ "state": "anchor_set", "anchor": "2026-07-10" })
    );

    // Second click before the anchor: bounds are ordered.
    let second = event(&app, &id, json!({ "type": "click", "day": "2026-07-01" })).await;
    assert_eq!(
        second["effect"],
        json!({
            "type": "paint",
            "season_id": "2026-high",
            "from": "2026-07-01",
            "to": "2026-07-10",
        })
    );
    assert_eq!(second["selection"]["state"], json!({ "state": "idle" }));
    assert_eq!(second["changes"]["changes"]["upserted"], json!(["2026-high"]));

    let seasons = body_json(get(app, &format!("{BASE}/seasons")).await).await;
    assert_eq!(
        seasons["data"][0]["dateRanges"],
        json!([{ "start": "2026-07-01", "end": "2026-07-10" }])
    );
}

#[tokio::test]
async fn click_on_owned_day_toggles_it_off() {
    let (app, id) = setup().await;
    select_high(&app, &id).await;
    event(&app, &id, json!({ "type": "click", "day": "2026-07-01" })).await;
    event(&app, &id, json!({ "type": "click", "day": "2026-07-03" })).await;

    let data = event(&app, &id, json!({ "type": "click", "day": "2026-07-02" })).await;

    assert_eq!(
        data["effect"],
        json!({ "type": "remove_day", "season_id": "2026-high", "day": "2026-07-02" })
    );
    assert_eq!(
        data["changes"]["seasons"][0]["dateRanges"],
        json!([
            { "start": "2026-07-01", "end": "2026-07-01" },
            { "start": "2026-07-03", "end": "2026-07-03" },
        ])
    );
}

#[tokio::test]
async fn hover_previews_without_mutating() {
    let (app, id) = setup().await;
    select_high(&app, &id).await;

    let idle = event(&app, &id, json!({ "type": "hover", "day": "2026-07-05" })).await;
    assert_eq!(idle["preview"], json!([]));

    event(&app, &id, json!({ "type": "click", "day": "2026-07-01" })).await;
    let data = event(&app, &id, json!({ "type": "hover", "day": "2026-07-05" })).await;

    assert_eq!(
        data["preview"],
        json!([{ "start": "2026-07-01", "end": "2026-07-05" }])
    );
    assert_eq!(
        data["selection"]["state"],
        json!({ "state": "anchor_set", "anchor": "2026-07-01" })
    );

    let seasons = body_json(get(app, &format!("{BASE}/seasons")).await).await;
    assert_eq!(seasons["data"][0]["dateRanges"], json!([]));
}

#[tokio::test]
async fn escape_cancels_pending_anchor() {
    let (app, id) = setup().await;
    select_high(&app, &id).await;
    event(&app, &id, json!({ "type": "click", "day": "2026-07-01" })).await;

    let data = event(&app, &id, json!({ "type": "escape" })).await;
    assert_eq!(data["effect"], json!({ "type": "cancelled" }));
    assert_eq!(data["selection"]["state"], json!({ "state": "idle" }));

    // The next click starts a new range instead of painting.
    let next = event(&app, &id, json!({ "type": "click", "day": "2026-07-05" })).await;
    assert_eq!(next["effect"]["type"], "anchor_placed");
}

#[tokio::test]
async fn set_year_resets_anchor_and_ignores_other_years() {
    let (app, id) = setup().await;
    select_high(&app, &id).await;
    event(&app, &id, json!({ "type": "click", "day": "2026-07-01" })).await;

    let data = event(&app, &id, json!({ "type": "set_year", "year": 2027 })).await;
    assert_eq!(data["effect"], json!({ "type": "cancelled" }));
    assert_eq!(data["selection"]["year"], 2027);

    let ignored = event(&app, &id, json!({ "type": "click", "day": "2026-07-05" })).await;
    assert_eq!(ignored["effect"], json!({ "type": "none" }));
}

#[tokio::test]
async fn concurrent_clicks_on_one_anchor_paint_once() {
    let (app, id) = setup().await;
    select_high(&app, &id).await;
    event(&app, &id, json!({ "type": "click", "day": "2026-03-01" })).await;

    let (first, second) = tokio::join!(
        event(&app, &id, json!({ "type": "click", "day": "2026-03-05" })),
        event(&app, &id, json!({ "type": "click", "day": "2026-03-20" })),
    );

    let mut kinds = vec![
        first["effect"]["type"].as_str().unwrap().to_string(),
        second["effect"]["type"].as_str().unwrap().to_string(),
    ];
    kinds.sort();
    assert_eq!(kinds, ["anchor_placed", "paint"]);

    // Only one span was painted; the other click started a new range.
    let seasons = body_json(get(app.clone(), &format!("{BASE}/seasons")).await).await;
    let ranges = seasons["data"][0]["dateRanges"].clone();
    assert!(
        ranges == json!([{ "start": "2026-03-01", "end": "2026-03-05" }])
            || ranges == json!([{ "start": "2026-03-01", "end": "2026-03-20" }]),
        "unexpected ranges {ranges}"
    );

    let session = body_json(get(app, &format!("/api/v1/editor/{id}")).await).await;
    assert_eq!(session["data"]["selection"]["state"]["state"], "anchor_set");
}

#[tokio::test]
async fn escape_racing_a_click_is_not_lost() {
    let (app, id) = setup().await;
    select_high(&app, &id).await;
    event(&app, &id, json!({ "type": "click", "day": "2026-03-01" })).await;

    let (click, escape) = tokio::join!(
        event(&app, &id, json!({ "type": "click", "day": "2026-03-05" })),
        event(&app, &id, json!({ "type": "escape" })),
    );

    // Either the click painted and escape found nothing to cancel, or
    // escape cancelled first and the click placed a fresh anchor.
    match click["effect"]["type"].as_str().unwrap() {
        "paint" => assert_eq!(escape["effect"], json!({ "type": "none" })),
        "anchor_placed" => assert_eq!(escape["effect"], json!({ "type": "cancelled" })),
        other => panic!("unexpected click effect {other}"),
    }
}

#[tokio::test]
async fn selecting_unknown_season_returns_404() {
    let (app, id) = setup().await;

    let response = post_json(
        app,
        &format!("/api/v1/editor/{id}/events"),
        json!({ "type": "select_season", "season_id": "2026-missing" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_click_date_returns_400() {
    let (app, id) = setup().await;

    let response = post_json(
        app,
        &format!("/api/v1/editor/{id}/events"),
        json!({ "type": "click", "day": "2026-13-01" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_DATE");
}

#[tokio::test]
async fn closed_session_is_gone() {
    let (app, id) = setup().await;

    let response = delete(app.clone(), &format!("/api/v1/editor/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.clone(), &format!("/api/v1/editor/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(app, &format!("/api/v1/editor/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_session_returns_404() {
    let response = post_json(
        build_app_with(test_state()),
        "/api/v1/editor/00000000-0000-0000-0000-000000000000/events",
        json!({ "type": "escape" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
