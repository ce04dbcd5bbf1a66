pub mod dashboard;
pub mod docs;
pub mod events;
pub mod hardware;
pub mod health;
pub mod skills;
pub mod users;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::AppState;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/:id", get(users::get_user).put(users::update_user))
        .route("/users/:id/checkin", put(users::check_in_user))
        .route("/users/:id/events", get(users::list_user_events))
        .route("/skills", get(skills::list_skills))
        .route("/events", get(events::list_events))
        .route("/scan", post(events::scan_user))
        .route("/hardware", get(hardware::list_hardware))
        .route("/hardware/:id/signout", post(hardware::sign_out_hardware))
        .route("/hardware/:id/return", post(hardware::return_hardware))
        .route("/hacker/:id/dashboard", get(dashboard::get_dashboard))
}
