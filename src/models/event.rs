use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub description: String,
    pub location: String,
}

/// An event joined with the scan that admitted a given user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AttendedEvent {
    pub id: i64,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub description: String,
    pub location: String,
    pub scanned_at: DateTime<Utc>,
}
