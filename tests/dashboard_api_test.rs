mod common;

use axum::http::StatusCode;

use common::{send, setup_app};

#[tokio::test]
async fn dashboard_aggregates_profile_hardware_and_events() {
    let (app, _pool) = setup_app().await;

    send(&app, "POST", "/hardware/2/signout?user_id=1", None).await;
    send(&app, "POST", "/hardware/3/signout?user_id=1", None).await;
    send(&app, "POST", "/scan?user_id=1&event_id=1", None).await;

    let (status, body) = send(&app, "GET", "/hacker/1/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_info"]["name"], "Hacker 1");

    let hardware = body["signed_out_hardware"].as_array().unwrap();
    let serials: Vec<_> = hardware
        .iter()
        .map(|h| h["serial_number"].as_str().unwrap())
        .collect();
    assert_eq!(serials, vec!["SN-0002", "SN-0003"]);

    let events = body["checked_in_events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["name"], "Opening Ceremony");
    assert_eq!(events[0]["location"], "Main Hall");
}

#[tokio::test]
async fn dashboard_for_idle_user_has_empty_lists() {
    let (app, _pool) = setup_app().await;

    let (status, body) = send(&app, "GET", "/hacker/10/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["signed_out_hardware"].as_array().unwrap().len(), 0);
    assert_eq!(body["checked_in_events"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn dashboard_drops_returned_hardware() {
    let (app, _pool) = setup_app().await;

    send(&app, "POST", "/hardware/1/signout?user_id=6", None).await;
    send(&app, "POST", "/hardware/1/return", None).await;

    let (_, body) = send(&app, "GET", "/hacker/6/dashboard", None).await;
    assert!(body["signed_out_hardware"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn dashboard_for_unknown_user() {
    let (app, _pool) = setup_app().await;

    let (status, _) = send(&app, "GET", "/hacker/9999/dashboard", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_and_openapi() {
    let (app, _pool) = setup_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/hacker/{id}/dashboard"].is_object());
}
