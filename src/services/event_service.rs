use sqlx::{Executor, Sqlite, SqlitePool};

use crate::error::Result;
use crate::models::event::{AttendedEvent, Event};
use crate::services::user_service::{find_user, user_not_found};

#[derive(Clone)]
pub struct EventService {
    pool: SqlitePool,
}

impl EventService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, name, start_time, end_time, description, location
            FROM events
            ORDER BY start_time, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(events)
    }

    pub async fn attended_by(&self, user_id: i64) -> Result<Vec<AttendedEvent>> {
        if find_user(&self.pool, user_id).await?.is_none() {
            return Err(user_not_found(user_id));
        }
        attended_events(&self.pool, user_id).await
    }
}

pub(crate) async fn find_event<'e, E>(executor: E, id: i64) -> Result<Option<Event>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let event = sqlx::query_as::<_, Event>(
        "SELECT id, name, start_time, end_time, description, location FROM events WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(event)
}

pub(crate) async fn attended_events<'e, E>(executor: E, user_id: i64) -> Result<Vec<AttendedEvent>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let events = sqlx::query_as::<_, AttendedEvent>(
        r#"
        SELECT e.id, e.name, e.start_time, e.end_time, e.description, e.location,
               se.created_at AS scanned_at
        FROM scan_events se
        JOIN events e ON e.id = se.event_id
        WHERE se.user_id = ?
        ORDER BY se.created_at, se.id
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await?;
    Ok(events)
}
