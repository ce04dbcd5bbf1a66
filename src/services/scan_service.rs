use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::{Error, Result};
use crate::models::scan_event::ScanEvent;
use crate::services::event_service::find_event;
use crate::services::user_service::{find_user, user_not_found};

#[derive(Clone)]
pub struct ScanService {
    pool: SqlitePool,
}

impl ScanService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Records that `user_id` attended `event_id`. A pair can only be scanned once.
    pub async fn scan(&self, user_id: i64, event_id: i64) -> Result<ScanEvent> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query_as::<_, ScanEvent>(
            r#"
            INSERT INTO scan_events (user_id, event_id, created_at)
            SELECT ?, ?, ?
            WHERE EXISTS (SELECT 1 FROM events WHERE id = ?)
              AND EXISTS (SELECT 1 FROM users WHERE id = ?)
            ON CONFLICT (user_id, event_id) DO NOTHING
            RETURNING id, user_id, event_id, created_at
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .bind(Utc::now())
        .bind(event_id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(scan) = inserted else {
            if find_event(&mut *tx, event_id).await?.is_none() {
                return Err(Error::NotFound(format!("Event {} not found", event_id)));
            }
            if find_user(&mut *tx, user_id).await?.is_none() {
                return Err(user_not_found(user_id));
            }
            return Err(Error::Conflict(format!(
                "User {} has already been scanned into event {}",
                user_id, event_id
            )));
        };
        tx.commit().await?;

        tracing::info!(user_id, event_id, scan_id = scan.id, "user scanned into event");
        Ok(scan)
    }
}
