use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::event::AttendedEvent;
use crate::models::hardware::Hardware;
use crate::models::user::UserWithSkills;
use crate::services::event_service::attended_events;
use crate::services::hardware_service::held_by;
use crate::services::user_service::load_profile;

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub user: UserWithSkills,
    pub hardware: Vec<Hardware>,
    pub events: Vec<AttendedEvent>,
}

#[derive(Clone)]
pub struct DashboardService {
    pool: SqlitePool,
}

impl DashboardService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Reads the profile, held hardware and attended events from one snapshot.
    pub async fn get(&self, user_id: i64) -> Result<Dashboard> {
        let mut tx = self.pool.begin().await?;
        let user = load_profile(&mut *tx, user_id).await?;
        let hardware = held_by(&mut *tx, user_id).await?;
        let events = attended_events(&mut *tx, user_id).await?;
        tx.commit().await?;

        Ok(Dashboard {
            user,
            hardware,
            events,
        })
    }
}
