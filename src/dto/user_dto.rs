use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::user::{UserSkillRating, UserWithSkills};

pub const DEFAULT_PAGE_LIMIT: i64 = 100;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserListQuery {
    /// Number of users to skip, must not be negative.
    pub skip: Option<i64>,
    /// Maximum number of users to return, must not be negative.
    pub limit: Option<i64>,
    /// Only return users that have checked in.
    pub checked_in_only: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SkillRatingPayload {
    #[validate(length(min = 1))]
    pub skill: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserPayload {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub company: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1))]
    pub phone: Option<String>,
    pub checked_in: Option<bool>,
    #[validate(nested)]
    pub skills: Option<Vec<SkillRatingPayload>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserPayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub company: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone: String,
    pub checked_in: Option<bool>,
    #[serde(default)]
    #[validate(nested)]
    pub skills: Vec<SkillRatingPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SkillRatingResponse {
    pub skill: String,
    pub rating: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub checked_in: bool,
    pub skills: Vec<SkillRatingResponse>,
}

impl From<UserSkillRating> for SkillRatingResponse {
    fn from(value: UserSkillRating) -> Self {
        Self {
            skill: value.skill_name,
            rating: value.rating,
        }
    }
}

impl From<UserWithSkills> for UserResponse {
    fn from(value: UserWithSkills) -> Self {
        let user = value.user;
        Self {
            id: user.id,
            name: user.name,
            company: user.company,
            email: user.email,
            phone: user.phone,
            checked_in: user.checked_in,
            skills: value.skills.into_iter().map(Into::into).collect(),
        }
    }
}
