use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{
        event_dto::AttendedEventResponse,
        user_dto::{CreateUserPayload, UpdateUserPayload, UserListQuery, UserResponse},
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/users",
    params(UserListQuery),
    responses(
        (status = 200, description = "Page of users with their skills", body = [UserResponse]),
        (status = 400, description = "Negative skip or limit")
    )
)]
#[axum::debug_handler]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<UserListQuery>,
) -> Result<impl IntoResponse> {
    let users = state.user_service.list(query).await?;
    let body: Vec<UserResponse> = users.into_iter().map(Into::into).collect();
    Ok(Json(body))
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid payload, rating out of range or duplicate email/phone")
    )
)]
#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state.user_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.get(id).await?;
    Ok(Json(UserResponse::from(user)))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UpdateUserPayload,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid payload or rating out of range"),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUserPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state.user_service.update(id, payload).await?;
    Ok(Json(UserResponse::from(user)))
}

#[utoipa::path(
    put,
    path = "/users/{id}/checkin",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User checked in", body = UserResponse),
        (status = 400, description = "User already checked in"),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn check_in_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.check_in(id).await?;
    Ok(Json(UserResponse::from(user)))
}

#[utoipa::path(
    get,
    path = "/users/{id}/events",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Events the user was scanned into", body = [AttendedEventResponse]),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn list_user_events(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let events = state.event_service.attended_by(id).await?;
    let body: Vec<AttendedEventResponse> = events.into_iter().map(Into::into).collect();
    Ok(Json(body))
}
