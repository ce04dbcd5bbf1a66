use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        event_dto::{EventResponse, ScanQuery},
        MessageResponse,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/events",
    responses(
        (status = 200, description = "All events by start time", body = [EventResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_events(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let events = state.event_service.list().await?;
    let body: Vec<EventResponse> = events.into_iter().map(Into::into).collect();
    Ok(Json(body))
}

#[utoipa::path(
    post,
    path = "/scan",
    params(ScanQuery),
    responses(
        (status = 200, description = "Scan recorded", body = MessageResponse),
        (status = 400, description = "User already scanned into this event"),
        (status = 404, description = "User or event not found")
    )
)]
#[axum::debug_handler]
pub async fn scan_user(
    State(state): State<AppState>,
    Query(query): Query<ScanQuery>,
) -> Result<impl IntoResponse> {
    state
        .scan_service
        .scan(query.user_id, query.event_id)
        .await?;
    Ok(Json(MessageResponse::new("User scanned successfully")))
}
