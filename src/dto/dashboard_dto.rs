use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::event_dto::AttendedEventResponse;
use crate::dto::hardware_dto::HardwareResponse;
use crate::dto::user_dto::UserResponse;
use crate::services::dashboard_service::Dashboard;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    pub user_info: UserResponse,
    pub signed_out_hardware: Vec<HardwareResponse>,
    pub checked_in_events: Vec<AttendedEventResponse>,
}

impl From<Dashboard> for DashboardResponse {
    fn from(value: Dashboard) -> Self {
        Self {
            user_info: value.user.into(),
            signed_out_hardware: value.hardware.into_iter().map(Into::into).collect(),
            checked_in_events: value.events.into_iter().map(Into::into).collect(),
        }
    }
}
