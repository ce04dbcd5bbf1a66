use std::collections::HashSet;
use std::path::Path;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::dto::user_dto::SkillRatingPayload;
use crate::error::Result;
use crate::models::skill::is_valid_rating;
use crate::services::user_service::upsert_skill_ratings;
use crate::utils::time::from_epoch_millis;

pub const EVENTS_FILE: &str = "events.json";
pub const HARDWARE_FILE: &str = "hardware.json";
pub const USERS_FILE: &str = "users.json";

#[derive(Debug, Clone, Deserialize)]
struct EventFixture {
    id: i64,
    name: String,
    /// Epoch milliseconds.
    start_time: i64,
    end_time: i64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    location: String,
}

#[derive(Debug, Clone, Deserialize)]
struct HardwareFixture {
    name: String,
    serial_number: String,
}

#[derive(Debug, Clone, Deserialize)]
struct UserFixture {
    name: String,
    company: String,
    email: String,
    phone: String,
    #[serde(default)]
    skills: Vec<SkillRatingPayload>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FixtureReport {
    pub events_inserted: usize,
    pub events_skipped: usize,
    pub hardware_inserted: usize,
    pub hardware_skipped: usize,
    pub users_inserted: usize,
    pub users_skipped: usize,
}

/// Seeds the store from JSON files. Rows that would break a uniqueness
/// constraint are skipped, so loading the same directory twice is a no-op.
#[derive(Clone)]
pub struct FixtureService {
    pool: SqlitePool,
}

impl FixtureService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn load_dir(&self, dir: impl AsRef<Path>) -> Result<FixtureReport> {
        let dir = dir.as_ref();
        let mut report = FixtureReport::default();

        if let Some(events) = read_fixture::<EventFixture>(&dir.join(EVENTS_FILE)).await? {
            self.load_events(events, &mut report).await?;
        }
        if let Some(hardware) = read_fixture::<HardwareFixture>(&dir.join(HARDWARE_FILE)).await? {
            self.load_hardware(hardware, &mut report).await?;
        }
        if let Some(users) = read_fixture::<UserFixture>(&dir.join(USERS_FILE)).await? {
            self.load_users(users, &mut report).await?;
        }

        tracing::info!(?report, dir = %dir.display(), "fixtures loaded");
        Ok(report)
    }

    async fn load_events(&self, events: Vec<EventFixture>, report: &mut FixtureReport) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for event in events {
            let inserted = sqlx::query(
                r#"
                INSERT INTO events (id, name, start_time, end_time, description, location)
                VALUES (?, ?, ?, ?, ?, ?)
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(event.id)
            .bind(&event.name)
            .bind(from_epoch_millis(event.start_time)?)
            .bind(from_epoch_millis(event.end_time)?)
            .bind(&event.description)
            .bind(&event.location)
            .execute(&mut *tx)
            .await?;
            if inserted.rows_affected() == 0 {
                tracing::warn!(event_id = event.id, name = %event.name, "skipping existing event");
                report.events_skipped += 1;
                continue;
            }
            report.events_inserted += 1;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn load_hardware(
        &self,
        hardware: Vec<HardwareFixture>,
        report: &mut FixtureReport,
    ) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for item in hardware {
            let inserted = sqlx::query(
                "INSERT INTO hardware (name, serial_number) VALUES (?, ?) ON CONFLICT DO NOTHING",
            )
            .bind(&item.name)
            .bind(&item.serial_number)
            .execute(&mut *tx)
            .await?;
            if inserted.rows_affected() == 0 {
                tracing::warn!(serial_number = %item.serial_number, "skipping existing hardware");
                report.hardware_skipped += 1;
                continue;
            }
            report.hardware_inserted += 1;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn load_users(&self, users: Vec<UserFixture>, report: &mut FixtureReport) -> Result<()> {
        for user in users {
            let mut tx = self.pool.begin().await?;

            let inserted = sqlx::query_scalar::<_, i64>(
                r#"
                INSERT INTO users (name, company, email, phone, checked_in)
                VALUES (?, ?, ?, ?, 0)
                ON CONFLICT DO NOTHING
                RETURNING id
                "#,
            )
            .bind(&user.name)
            .bind(&user.company)
            .bind(&user.email)
            .bind(&user.phone)
            .fetch_optional(&mut *tx)
            .await?;
            let Some(user_id) = inserted else {
                tracing::warn!(
                    email = %user.email,
                    phone = %user.phone,
                    "skipping user with duplicate email or phone"
                );
                report.users_skipped += 1;
                continue;
            };

            let skills = usable_skills(&user.email, user.skills);
            upsert_skill_ratings(&mut *tx, user_id, &skills).await?;
            tx.commit().await?;
            report.users_inserted += 1;
        }
        Ok(())
    }
}

/// Drops repeated skill names (first wins) and ratings outside the valid range.
fn usable_skills(email: &str, skills: Vec<SkillRatingPayload>) -> Vec<SkillRatingPayload> {
    let mut seen = HashSet::new();
    let mut usable = Vec::with_capacity(skills.len());
    for entry in skills {
        if !seen.insert(entry.skill.clone()) {
            tracing::warn!(email, skill = %entry.skill, "skipping duplicate skill entry");
            continue;
        }
        if !is_valid_rating(entry.rating) || entry.skill.trim().is_empty() {
            tracing::warn!(email, skill = %entry.skill, rating = entry.rating, "skipping invalid skill rating");
            continue;
        }
        usable.push(entry);
    }
    usable
}

async fn read_fixture<T: DeserializeOwned>(path: &Path) -> Result<Option<Vec<T>>> {
    if !tokio::fs::try_exists(path).await? {
        tracing::warn!(path = %path.display(), "fixture file not found, skipping");
        return Ok(None);
    }
    let raw = tokio::fs::read_to_string(path).await?;
    let rows = serde_json::from_str(&raw)?;
    Ok(Some(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usable_skills_keeps_first_and_drops_invalid() {
        let skills = vec![
            SkillRatingPayload { skill: "Swift".into(), rating: 4 },
            SkillRatingPayload { skill: "Swift".into(), rating: 1 },
            SkillRatingPayload { skill: "OCaml".into(), rating: 9 },
            SkillRatingPayload { skill: "Elixir".into(), rating: 2 },
        ];
        let kept = usable_skills("a@example.com", skills);
        let names: Vec<_> = kept.iter().map(|s| (s.skill.as_str(), s.rating)).collect();
        assert_eq!(names, vec![("Swift", 4), ("Elixir", 2)]);
    }
}
