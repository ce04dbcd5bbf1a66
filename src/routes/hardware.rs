use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        hardware_dto::{HardwareListQuery, HardwareResponse, SignOutQuery},
        MessageResponse,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/hardware",
    params(HardwareListQuery),
    responses(
        (status = 200, description = "Hardware inventory", body = [HardwareResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_hardware(
    State(state): State<AppState>,
    Query(query): Query<HardwareListQuery>,
) -> Result<impl IntoResponse> {
    let items = state
        .hardware_service
        .list(query.available_only.unwrap_or(false))
        .await?;
    let body: Vec<HardwareResponse> = items.into_iter().map(Into::into).collect();
    Ok(Json(body))
}

#[utoipa::path(
    post,
    path = "/hardware/{id}/signout",
    params(
        ("id" = i64, Path, description = "Hardware ID"),
        SignOutQuery
    ),
    responses(
        (status = 200, description = "Hardware signed out", body = MessageResponse),
        (status = 400, description = "Hardware already signed out"),
        (status = 404, description = "Hardware or user not found")
    )
)]
#[axum::debug_handler]
pub async fn sign_out_hardware(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<SignOutQuery>,
) -> Result<impl IntoResponse> {
    let item = state.hardware_service.sign_out(id, query.user_id).await?;
    Ok(Json(MessageResponse::new(format!(
        "Hardware {} signed out by user {}",
        item.id, query.user_id
    ))))
}

#[utoipa::path(
    post,
    path = "/hardware/{id}/return",
    params(
        ("id" = i64, Path, description = "Hardware ID")
    ),
    responses(
        (status = 200, description = "Hardware returned", body = MessageResponse),
        (status = 400, description = "Hardware is not signed out"),
        (status = 404, description = "Hardware or holder not found")
    )
)]
#[axum::debug_handler]
pub async fn return_hardware(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let returned = state.hardware_service.return_item(id).await?;
    Ok(Json(MessageResponse::new(format!(
        "Hardware {} returned by user {}",
        returned.hardware.id, returned.returned_by
    ))))
}
