use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use crate::{dto::dashboard_dto::DashboardResponse, error::Result, AppState};

#[utoipa::path(
    get,
    path = "/hacker/{id}/dashboard",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Profile, borrowed hardware and attended events", body = DashboardResponse),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let dashboard = state.dashboard_service.get(id).await?;
    Ok(Json(DashboardResponse::from(dashboard)))
}
