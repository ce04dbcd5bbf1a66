use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Skill {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillFrequency {
    pub skill_name: String,
    pub frequency: i64,
}

pub fn is_valid_rating(rating: i64) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}
