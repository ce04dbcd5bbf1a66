use sqlx::SqlitePool;

use crate::dto::skill_dto::SkillFrequencyQuery;
use crate::error::{Error, Result};
use crate::models::skill::SkillFrequency;

#[derive(Clone)]
pub struct SkillService {
    pool: SqlitePool,
}

impl SkillService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Number of users rated on each skill, optionally restricted to the closed
    /// range `[min_frequency, max_frequency]`. Skills nobody holds count as 0.
    pub async fn frequencies(&self, query: SkillFrequencyQuery) -> Result<Vec<SkillFrequency>> {
        let (min, max) = frequency_bounds(&query)?;

        let rows = sqlx::query_as::<_, SkillFrequency>(
            r#"
            SELECT s.name AS skill_name, COUNT(us.user_id) AS frequency
            FROM skills s
            LEFT JOIN user_skills us ON us.skill_id = s.id
            GROUP BY s.id, s.name
            HAVING COUNT(us.user_id) >= ? AND COUNT(us.user_id) <= ?
            ORDER BY frequency DESC, s.name ASC
            "#,
        )
        .bind(min)
        .bind(max)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

fn frequency_bounds(query: &SkillFrequencyQuery) -> Result<(i64, i64)> {
    for (name, value) in [
        ("min_frequency", query.min_frequency),
        ("max_frequency", query.max_frequency),
    ] {
        if let Some(v) = value {
            if v < 0 {
                return Err(Error::InvalidArgument(format!(
                    "{} must not be negative, got {}",
                    name, v
                )));
            }
        }
    }

    let min = query.min_frequency.unwrap_or(0);
    let max = query.max_frequency.unwrap_or(i64::MAX);
    if min > max {
        return Err(Error::InvalidArgument(format!(
            "min_frequency ({}) must not exceed max_frequency ({})",
            min, max
        )));
    }
    Ok((min, max))
}
