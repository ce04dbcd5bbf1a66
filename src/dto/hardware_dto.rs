use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::hardware::{Hardware, HardwareState};

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SignOutQuery {
    pub user_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HardwareListQuery {
    /// Only list items that are not currently signed out.
    pub available_only: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HardwareResponse {
    pub id: i64,
    pub name: String,
    pub serial_number: String,
    pub signed_out_by: Option<i64>,
    pub available: bool,
}

impl From<Hardware> for HardwareResponse {
    fn from(value: Hardware) -> Self {
        let available = value.state() == HardwareState::Available;
        Self {
            id: value.id,
            name: value.name,
            serial_number: value.serial_number,
            signed_out_by: value.signed_out_by,
            available,
        }
    }
}
