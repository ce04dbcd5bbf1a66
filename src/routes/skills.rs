use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::skill_dto::{SkillFrequencyQuery, SkillFrequencyResponse},
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/skills",
    params(SkillFrequencyQuery),
    responses(
        (status = 200, description = "Skills with the number of users holding each", body = [SkillFrequencyResponse]),
        (status = 400, description = "Invalid frequency bounds")
    )
)]
#[axum::debug_handler]
pub async fn list_skills(
    State(state): State<AppState>,
    Query(query): Query<SkillFrequencyQuery>,
) -> Result<impl IntoResponse> {
    let rows = state.skill_service.frequencies(query).await?;
    let body: Vec<SkillFrequencyResponse> = rows.into_iter().map(Into::into).collect();
    Ok(Json(body))
}
