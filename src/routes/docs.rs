use axum::Json;
use utoipa::OpenApi;

use crate::dto::{
    dashboard_dto::DashboardResponse,
    event_dto::{AttendedEventResponse, EventResponse},
    hardware_dto::HardwareResponse,
    skill_dto::SkillFrequencyResponse,
    user_dto::{
        CreateUserPayload, SkillRatingPayload, SkillRatingResponse, UpdateUserPayload,
        UserResponse,
    },
    MessageResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::users::list_users,
        crate::routes::users::create_user,
        crate::routes::users::get_user,
        crate::routes::users::update_user,
        crate::routes::users::check_in_user,
        crate::routes::users::list_user_events,
        crate::routes::skills::list_skills,
        crate::routes::events::list_events,
        crate::routes::events::scan_user,
        crate::routes::hardware::list_hardware,
        crate::routes::hardware::sign_out_hardware,
        crate::routes::hardware::return_hardware,
        crate::routes::dashboard::get_dashboard,
    ),
    components(schemas(
        UserResponse,
        SkillRatingResponse,
        SkillRatingPayload,
        CreateUserPayload,
        UpdateUserPayload,
        SkillFrequencyResponse,
        EventResponse,
        AttendedEventResponse,
        HardwareResponse,
        DashboardResponse,
        MessageResponse,
    ))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
