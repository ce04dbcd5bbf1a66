pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    dashboard_service::DashboardService, event_service::EventService,
    fixture_service::FixtureService, hardware_service::HardwareService,
    scan_service::ScanService, skill_service::SkillService, user_service::UserService,
};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub user_service: UserService,
    pub skill_service: SkillService,
    pub event_service: EventService,
    pub scan_service: ScanService,
    pub hardware_service: HardwareService,
    pub dashboard_service: DashboardService,
    pub fixture_service: FixtureService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            user_service: UserService::new(pool.clone()),
            skill_service: SkillService::new(pool.clone()),
            event_service: EventService::new(pool.clone()),
            scan_service: ScanService::new(pool.clone()),
            hardware_service: HardwareService::new(pool.clone()),
            dashboard_service: DashboardService::new(pool.clone()),
            fixture_service: FixtureService::new(pool.clone()),
            pool,
        }
    }
}

/// The full HTTP application, without CORS (which depends on configuration).
pub fn build_app(state: AppState) -> Router {
    routes::api_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
