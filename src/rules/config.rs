use serde::{Deserialize, Serialize};

use super::bonus::{BONUS_ATTENDANCE_COUNT, BONUS_POINTS};
use super::day::{DAILY_POINT, WEDNESDAY_POINT, WEEKEND_POINT};
use super::grade::{GOLD_GRADE_POINT, SILVER_GRADE_POINT};
use crate::registry::MAX_USERS;

/// Rule configuration.
///
/// Every field is optional; anything left out keeps its built-in value.
/// Values are read once at startup and stay fixed for the run.
///
/// Example YAML:
/// ```yaml
/// rules:
///   max_users: 100
///   days:
///     daily: 1
///     wednesday: 3
///     weekend: 2
///   bonus:
///     attendance_count: 10
///     points: 10
///   grades:
///     gold: 50
///     silver: 30
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// Maximum number of distinct users in one run (default: 100)
    #[serde(default)]
    pub max_users: Option<usize>,

    /// Points per attendance, by day category
    #[serde(default)]
    pub days: Option<DayPointsConfig>,

    /// Category bonus threshold and award
    #[serde(default)]
    pub bonus: Option<BonusConfig>,

    /// Grade thresholds (inclusive lower bounds)
    #[serde(default)]
    pub grades: Option<GradeConfig>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_users: Some(MAX_USERS),
            days: Some(DayPointsConfig::default()),
            bonus: Some(BonusConfig::default()),
            grades: Some(GradeConfig::default()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DayPointsConfig {
    /// Monday, Tuesday, Thursday, Friday
    #[serde(default)]
    pub daily: Option<u32>,

    #[serde(default)]
    pub wednesday: Option<u32>,

    /// Saturday and Sunday
    #[serde(default)]
    pub weekend: Option<u32>,
}

impl Default for DayPointsConfig {
    fn default() -> Self {
        Self {
            daily: Some(DAILY_POINT),
            wednesday: Some(WEDNESDAY_POINT),
            weekend: Some(WEEKEND_POINT),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BonusConfig {
    /// Category attendances required for the bonus
    #[serde(default)]
    pub attendance_count: Option<u32>,

    /// Points awarded when the bonus fires
    #[serde(default)]
    pub points: Option<u32>,
}

impl Default for BonusConfig {
    fn default() -> Self {
        Self {
            attendance_count: Some(BONUS_ATTENDANCE_COUNT),
            points: Some(BONUS_POINTS),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GradeConfig {
    #[serde(default)]
    pub gold: Option<u32>,

    #[serde(default)]
    pub silver: Option<u32>,
}

impl Default for GradeConfig {
    fn default() -> Self {
        Self {
            gold: Some(GOLD_GRADE_POINT),
            silver: Some(SILVER_GRADE_POINT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_config() {
        let config = RulesConfig::default();

        assert_eq!(config.max_users, Some(100));
        assert_eq!(config.days.as_ref().unwrap().wednesday, Some(3));
        assert_eq!(config.bonus.as_ref().unwrap().attendance_count, Some(10));
        assert_eq!(config.grades.as_ref().unwrap().gold, Some(50));
    }

    #[test]
    fn test_rules_config_serde_roundtrip() {
        let config = RulesConfig::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: RulesConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_rules_config_parse() {
        let yaml = r#"
grades:
  gold: 60
"#;
        let config: RulesConfig = serde_saphyr::from_str(yaml).unwrap();
        let grades = config.grades.unwrap();
        assert_eq!(grades.gold, Some(60));
        assert!(grades.silver.is_none());
        assert!(config.days.is_none());
        assert!(config.bonus.is_none());
        assert!(config.max_users.is_none());
    }

    #[test]
    fn test_empty_rules_config_parse() {
        let config: RulesConfig = serde_saphyr::from_str("{}").unwrap();
        assert!(config.max_users.is_none());
        assert!(config.days.is_none());
        assert!(config.bonus.is_none());
        assert!(config.grades.is_none());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = r#"
grades:
  platinum: 80
"#;
        let result: Result<RulesConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
