use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub checked_in: bool,
}

/// One row of the `user_skills` join, with the skill name resolved.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSkillRating {
    pub user_id: i64,
    pub skill_id: i64,
    pub skill_name: String,
    pub rating: i64,
}

#[derive(Debug, Clone)]
pub struct UserWithSkills {
    pub user: User,
    pub skills: Vec<UserSkillRating>,
}
