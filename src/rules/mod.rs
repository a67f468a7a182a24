pub mod bonus;
pub mod config;
pub mod day;
pub mod grade;
pub mod validation;

pub use bonus::{BonusKind, BonusPolicy, BonusRule, BONUS_ATTENDANCE_COUNT, BONUS_POINTS};
pub use config::*;
pub use day::{DayCategory, DayRule, DayRuleSet, Weekday};
pub use grade::{Grade, GradePolicy, GOLD_GRADE_POINT, SILVER_GRADE_POINT};
pub use validation::validate_rules;

use crate::registry::MAX_USERS;

/// Rule set in effect for one run, with configured values filled in over
/// the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    pub days: DayRuleSet,
    pub bonus: BonusPolicy,
    pub grades: GradePolicy,
    pub max_users: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            days: DayRuleSet::default(),
            bonus: BonusPolicy::default(),
            grades: GradePolicy::default(),
            max_users: MAX_USERS,
        }
    }
}

impl Rules {
    pub fn from_config(config: &RulesConfig) -> Self {
        let days = config.days.clone().unwrap_or_default();
        let bonus = config.bonus.clone().unwrap_or_default();
        let grades = config.grades.clone().unwrap_or_default();

        Self {
            days: DayRuleSet::new(
                days.daily.unwrap_or(day::DAILY_POINT),
                days.wednesday.unwrap_or(day::WEDNESDAY_POINT),
                days.weekend.unwrap_or(day::WEEKEND_POINT),
            ),
            bonus: BonusPolicy::new(
                bonus.attendance_count.unwrap_or(BONUS_ATTENDANCE_COUNT),
                bonus.points.unwrap_or(BONUS_POINTS),
            ),
            grades: GradePolicy::new(
                grades.gold.unwrap_or(GOLD_GRADE_POINT),
                grades.silver.unwrap_or(SILVER_GRADE_POINT),
            ),
            max_users: config.max_users.unwrap_or(MAX_USERS),
        }
    }
}
