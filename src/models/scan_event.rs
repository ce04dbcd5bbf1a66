use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScanEvent {
    pub id: i64,
    pub user_id: i64,
    pub event_id: i64,
    pub created_at: DateTime<Utc>,
}
