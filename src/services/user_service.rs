use std::collections::{HashMap, HashSet};

use sqlx::{Executor, QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

use crate::dto::user_dto::{
    CreateUserPayload, SkillRatingPayload, UpdateUserPayload, UserListQuery, DEFAULT_PAGE_LIMIT,
};
use crate::error::{Error, Result};
use crate::models::skill::{is_valid_rating, MAX_RATING, MIN_RATING};
use crate::models::user::{User, UserSkillRating, UserWithSkills};

#[derive(Clone)]
pub struct UserService {
    pool: SqlitePool,
}

impl UserService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, query: UserListQuery) -> Result<Vec<UserWithSkills>> {
        let skip = query.skip.unwrap_or(0);
        let limit = query.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        if skip < 0 {
            return Err(Error::InvalidArgument(format!(
                "skip must not be negative, got {}",
                skip
            )));
        }
        if limit < 0 {
            return Err(Error::InvalidArgument(format!(
                "limit must not be negative, got {}",
                limit
            )));
        }
        let checked_in_only = query.checked_in_only.unwrap_or(false);

        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, company, email, phone, checked_in
            FROM users
            WHERE (? = 0 OR checked_in = 1)
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(checked_in_only)
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        let mut conn = self.pool.acquire().await?;
        attach_skills(&mut *conn, users).await
    }

    pub async fn get(&self, id: i64) -> Result<UserWithSkills> {
        let mut conn = self.pool.acquire().await?;
        load_profile(&mut *conn, id).await
    }

    pub async fn create(&self, payload: CreateUserPayload) -> Result<UserWithSkills> {
        validate_ratings(&payload.skills)?;
        let skills = dedupe_skill_ratings(&payload.skills);

        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (name, company, email, phone, checked_in)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT DO NOTHING
            RETURNING id
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.company)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(payload.checked_in.unwrap_or(false))
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| {
            Error::Conflict("A user with this email or phone already exists".to_string())
        })?;

        upsert_skill_ratings(&mut *tx, id, &skills).await?;
        tx.commit().await?;

        tracing::info!(user_id = id, skills = skills.len(), "user created");
        self.get(id).await
    }

    /// Applies a partial update. Ratings are checked before anything is written,
    /// so a rejected request leaves the user untouched.
    pub async fn update(&self, id: i64, payload: UpdateUserPayload) -> Result<UserWithSkills> {
        let requested = payload.skills.as_deref().unwrap_or_default();
        validate_ratings(requested)?;
        let skills = dedupe_skill_ratings(requested);

        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            r#"
            UPDATE users
            SET
                name = COALESCE(?, name),
                company = COALESCE(?, company),
                email = COALESCE(?, email),
                phone = COALESCE(?, phone),
                checked_in = COALESCE(?, checked_in)
            WHERE id = ?
            "#,
        )
        .bind(payload.name)
        .bind(payload.company)
        .bind(payload.email)
        .bind(payload.phone)
        .bind(payload.checked_in)
        .bind(id)
        .execute(&mut *tx)
        .await?;
        if updated.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        upsert_skill_ratings(&mut *tx, id, &skills).await?;
        tx.commit().await?;

        tracing::debug!(user_id = id, skills = skills.len(), "user updated");
        self.get(id).await
    }

    pub async fn check_in(&self, id: i64) -> Result<UserWithSkills> {
        let mut tx = self.pool.begin().await?;

        // The conditional write comes first so the transaction holds the write
        // lock before it reads anything.
        let updated =
            sqlx::query("UPDATE users SET checked_in = 1 WHERE id = ? AND checked_in = 0")
                .bind(id)
                .execute(&mut *tx)
                .await?;
        if updated.rows_affected() == 0 {
            return Err(match find_user(&mut *tx, id).await? {
                Some(_) => Error::Conflict(format!("User {} is already checked in", id)),
                None => user_not_found(id),
            });
        }
        tx.commit().await?;

        tracing::info!(user_id = id, "user checked in");
        self.get(id).await
    }
}

pub(crate) fn user_not_found(id: i64) -> Error {
    Error::NotFound(format!("User {} not found", id))
}

pub(crate) async fn find_user<'e, E>(executor: E, id: i64) -> Result<Option<User>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, company, email, phone, checked_in FROM users WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(user)
}

pub(crate) async fn load_profile(conn: &mut SqliteConnection, id: i64) -> Result<UserWithSkills> {
    let user = find_user(&mut *conn, id)
        .await?
        .ok_or_else(|| user_not_found(id))?;
    let mut profiles = attach_skills(conn, vec![user]).await?;
    profiles.pop().ok_or_else(|| user_not_found(id))
}

async fn attach_skills(
    conn: &mut SqliteConnection,
    users: Vec<User>,
) -> Result<Vec<UserWithSkills>> {
    if users.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder = QueryBuilder::<Sqlite>::new(
        r#"
        SELECT us.user_id, us.skill_id, s.name AS skill_name, us.rating
        FROM user_skills us
        JOIN skills s ON s.id = us.skill_id
        WHERE us.user_id IN (
        "#,
    );
    let mut ids = builder.separated(", ");
    for user in &users {
        ids.push_bind(user.id);
    }
    ids.push_unseparated(") ORDER BY us.user_id, s.name");

    let rows = builder
        .build_query_as::<UserSkillRating>()
        .fetch_all(conn)
        .await?;

    let mut by_user: HashMap<i64, Vec<UserSkillRating>> = HashMap::new();
    for row in rows {
        by_user.entry(row.user_id).or_default().push(row);
    }

    Ok(users
        .into_iter()
        .map(|user| {
            let skills = by_user.remove(&user.id).unwrap_or_default();
            UserWithSkills { user, skills }
        })
        .collect())
}

/// Every rating in the request must be in range, repeated entries included.
pub(crate) fn validate_ratings(skills: &[SkillRatingPayload]) -> Result<()> {
    for entry in skills {
        if entry.skill.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "Skill name must not be empty".to_string(),
            ));
        }
        if !is_valid_rating(entry.rating) {
            return Err(Error::InvalidArgument(format!(
                "Rating for skill '{}' must be between {} and {}, got {}",
                entry.skill, MIN_RATING, MAX_RATING, entry.rating
            )));
        }
    }
    Ok(())
}

/// Keeps the first entry for each skill name.
pub(crate) fn dedupe_skill_ratings(skills: &[SkillRatingPayload]) -> Vec<SkillRatingPayload> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .filter(|entry| seen.insert(entry.skill.clone()))
        .cloned()
        .collect()
}

/// Resolves each skill by name (creating it when missing) and upserts the
/// user's rating for it.
pub(crate) async fn upsert_skill_ratings(
    conn: &mut SqliteConnection,
    user_id: i64,
    skills: &[SkillRatingPayload],
) -> Result<()> {
    for entry in skills {
        sqlx::query("INSERT INTO skills (name) VALUES (?) ON CONFLICT (name) DO NOTHING")
            .bind(&entry.skill)
            .execute(&mut *conn)
            .await?;

        let skill_id = sqlx::query_scalar::<_, i64>("SELECT id FROM skills WHERE name = ?")
            .bind(&entry.skill)
            .fetch_one(&mut *conn)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO user_skills (user_id, skill_id, rating)
            VALUES (?, ?, ?)
            ON CONFLICT (user_id, skill_id) DO UPDATE SET rating = excluded.rating
            "#,
        )
        .bind(user_id)
        .bind(skill_id)
        .bind(entry.rating)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}
