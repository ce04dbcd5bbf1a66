#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use serde_json::Value as JsonValue;
use sqlx::SqlitePool;
use tower::ServiceExt;

use checkin_backend::{
    build_app,
    database::{pool::connect_in_memory, run_migrations},
    AppState,
};

pub const USER_COUNT: i64 = 12;

pub async fn setup_pool() -> SqlitePool {
    let pool = connect_in_memory().await.expect("pool");
    run_migrations(&pool).await.expect("migrations");
    pool
}

/// Fresh app over a seeded in-memory database.
///
/// Users 1..=12 exist (none checked in). User 1 holds Swift=3 and Rust=4,
/// user 2 holds Swift=5, user 3 holds Go=2. Events 1 and 2 and hardware 1..=3
/// exist, nothing is scanned or signed out.
pub async fn setup_app() -> (Router, SqlitePool) {
    let pool = setup_pool().await;
    seed(&pool).await;
    let app = build_app(AppState::new(pool.clone()));
    (app, pool)
}

pub async fn seed(pool: &SqlitePool) {
    for i in 1..=USER_COUNT {
        sqlx::query(
            "INSERT INTO users (id, name, company, email, phone, checked_in) VALUES (?, ?, ?, ?, ?, 0)",
        )
        .bind(i)
        .bind(format!("Hacker {}", i))
        .bind("Acme")
        .bind(format!("hacker{}@example.com", i))
        .bind(format!("+1-555-01{:02}", i))
        .execute(pool)
        .await
        .expect("seed user");
    }

    for (id, name) in [(1_i64, "Swift"), (2, "Rust"), (3, "Go")] {
        sqlx::query("INSERT INTO skills (id, name) VALUES (?, ?)")
            .bind(id)
            .bind(name)
            .execute(pool)
            .await
            .expect("seed skill");
    }

    for (user_id, skill_id, rating) in [(1_i64, 1_i64, 3_i64), (1, 2, 4), (2, 1, 5), (3, 3, 2)] {
        sqlx::query("INSERT INTO user_skills (user_id, skill_id, rating) VALUES (?, ?, ?)")
            .bind(user_id)
            .bind(skill_id)
            .bind(rating)
            .execute(pool)
            .await
            .expect("seed user skill");
    }

    let start = Utc::now();
    for (id, name) in [(1_i64, "Opening Ceremony"), (2, "Intro to Rust")] {
        sqlx::query(
            "INSERT INTO events (id, name, start_time, end_time, description, location) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(name)
        .bind(start + Duration::hours(id))
        .bind(start + Duration::hours(id + 1))
        .bind(format!("{} description", name))
        .bind("Main Hall")
        .execute(pool)
        .await
        .expect("seed event");
    }

    for (id, name) in [(1_i64, "Arduino Uno"), (2, "Raspberry Pi 4"), (3, "Oculus Quest")] {
        sqlx::query("INSERT INTO hardware (id, name, serial_number) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(format!("SN-{:04}", id))
            .execute(pool)
            .await
            .expect("seed hardware");
    }
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null)
    };
    (status, body)
}

pub fn skills_of(user: &JsonValue) -> Vec<(String, i64)> {
    user["skills"]
        .as_array()
        .expect("skills array")
        .iter()
        .map(|s| {
            (
                s["skill"].as_str().unwrap().to_string(),
                s["rating"].as_i64().unwrap(),
            )
        })
        .collect()
}
