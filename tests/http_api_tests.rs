#![cfg(feature = "http_api")]

mod common;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use common::sample_schedule;
use festival_map::{ScheduleView, VenueTable, http_api};
use serde_json::{Value, json};
use tower::util::ServiceExt;

fn new_router() -> axum::Router {
    let view = ScheduleView::new(sample_schedule(), VenueTable::builtin());
    let state = http_api::AppState::new(view).with_api_key(Some("test-key".into()));
    http_api::router(state)
}

async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn options_and_config_describe_the_selectors() {
    let app = new_router();

    let (status, body) = send(&app, "GET", "/options", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dates"][0], json!({ "value": "2025-01-15", "label": "January 15, 2025" }));
    assert_eq!(body["locations"].as_array().unwrap().len(), 5);

    let (_, body) = send(&app, "GET", "/config", None).await;
    assert_eq!(body["mapsApiKey"], json!("test-key"));
    assert_eq!(body["zoom"], json!(13));
}

#[tokio::test]
async fn filters_narrow_the_venue_list() {
    let app = new_router();

    let (status, _) = send(
        &app,
        "PUT",
        "/filters",
        Some(json!({ "date": "2025-01-16", "location": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, venues) = send(&app, "GET", "/venues", None).await;
    let names: Vec<&str> = venues
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["venueName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Basilica del Sto. Nino", "Mandaue City", "SM Seaside Cebu"]);
    assert!(
        venues[0]["events"]
            .as_array()
            .unwrap()
            .iter()
            .all(|e| e["date"] == json!("2025-01-16"))
    );

    let (_, schedule) = send(&app, "GET", "/schedule", None).await;
    assert_eq!(schedule["days"].as_array().unwrap().len(), 1);
    assert_eq!(schedule["days"][0]["day"], json!(1));
}

#[tokio::test]
async fn unknown_filter_values_are_rejected() {
    let app = new_router();
    let (status, body) = send(
        &app,
        "PUT",
        "/filters",
        Some(json!({ "location": "Undisclosed venue TBA" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("invalid_request"));

    let (status, _) = send(&app, "PUT", "/filters", Some(json!({ "date": "2030-01-01" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn blank_filter_values_mean_all() {
    let app = new_router();
    send(&app, "PUT", "/filters", Some(json!({ "location": "GMall" }))).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/filters",
        Some(json!({ "date": "", "location": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "date": null, "location": null }));

    let (_, venues) = send(&app, "GET", "/venues", None).await;
    assert_eq!(venues.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn selecting_events_drives_markers_and_map() {
    let app = new_router();

    let (_, map) = send(&app, "GET", "/map", None).await;
    assert_eq!(map["ready"], json!(false));

    let (status, body) = send(&app, "POST", "/map/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["changed"], json!(true));

    let (status, body) = send(
        &app,
        "POST",
        "/events/select",
        Some(json!({ "day": 0, "index": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], json!("focused"));
    assert_eq!(body["recentered"], json!(true));
    assert_eq!(body["selected"]["name"], json!("Opening Mass"));

    let (_, map) = send(&app, "GET", "/map", None).await;
    assert_eq!(map["camera"]["center"], json!({ "lat": 10.2929, "lng": 123.9021 }));
    assert_eq!(map["camera"]["zoom"], json!(15));

    let (_, venues) = send(&app, "GET", "/venues", None).await;
    let visible: Vec<&str> = venues
        .as_array()
        .unwrap()
        .iter()
        .filter(|v| v["visible"] == json!(true))
        .map(|v| v["venueName"].as_str().unwrap())
        .collect();
    assert_eq!(visible, vec!["Basilica del Sto. Nino"]);

    let (status, _) = send(&app, "DELETE", "/selection", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, venues) = send(&app, "GET", "/venues", None).await;
    assert!(venues.as_array().unwrap().iter().all(|v| v["visible"] == json!(true)));
}

#[tokio::test]
async fn non_actionable_and_missing_events() {
    let app = new_router();

    let (status, body) = send(
        &app,
        "POST",
        "/events/select",
        Some(json!({ "day": 0, "index": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], json!("not_actionable"));
    assert_eq!(body["selected"], Value::Null);

    let (status, body) = send(
        &app,
        "POST",
        "/events/select",
        Some(json!({ "day": 0, "index": 42 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("not_found"));
}

#[tokio::test]
async fn marker_clicks_require_a_filtered_marker() {
    let app = new_router();

    let (status, body) = send(&app, "POST", "/markers/GMall/click", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recentered"], json!(false));

    let (status, _) = send(&app, "POST", "/markers/Colon%20Street/click", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    send(&app, "POST", "/map/ready", None).await;
    let (_, body) = send(&app, "POST", "/markers/SM%20Seaside%20Cebu/click", None).await;
    assert_eq!(body["recentered"], json!(true));
}
