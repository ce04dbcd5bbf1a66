use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::skill::SkillFrequency;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SkillFrequencyQuery {
    /// Lower bound (inclusive) on the number of users holding the skill.
    pub min_frequency: Option<i64>,
    /// Upper bound (inclusive) on the number of users holding the skill.
    pub max_frequency: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SkillFrequencyResponse {
    pub skill_name: String,
    pub frequency: i64,
}

impl From<SkillFrequency> for SkillFrequencyResponse {
    fn from(value: SkillFrequency) -> Self {
        Self {
            skill_name: value.skill_name,
            frequency: value.frequency,
        }
    }
}
