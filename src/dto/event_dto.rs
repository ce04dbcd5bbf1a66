use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::event::{AttendedEvent, Event};

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScanQuery {
    pub user_id: i64,
    pub event_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendedEventResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    pub scanned_at: DateTime<Utc>,
}

impl From<Event> for EventResponse {
    fn from(value: Event) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            start_time: value.start_time,
            end_time: value.end_time,
            location: value.location,
        }
    }
}

impl From<AttendedEvent> for AttendedEventResponse {
    fn from(value: AttendedEvent) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            start_time: value.start_time,
            end_time: value.end_time,
            location: value.location,
            scanned_at: value.scanned_at,
        }
    }
}
