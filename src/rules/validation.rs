use super::config::RulesConfig;
use super::grade::{GOLD_GRADE_POINT, SILVER_GRADE_POINT};

/// Validate rule configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_rules(config: &RulesConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.max_users == Some(0) {
        errors.push("rules.max_users: must be at least 1".to_string());
    }

    if let Some(ref bonus) = config.bonus {
        if bonus.attendance_count == Some(0) {
            errors.push("rules.bonus.attendance_count: must be at least 1".to_string());
        }
    }

    if let Some(ref grades) = config.grades {
        let gold = grades.gold.unwrap_or(GOLD_GRADE_POINT);
        let silver = grades.silver.unwrap_or(SILVER_GRADE_POINT);

        if silver == 0 {
            errors.push("rules.grades.silver: must be at least 1".to_string());
        }
        if gold <= silver {
            errors.push(format!(
                "rules.grades.gold: {} must be greater than silver ({})",
                gold, silver
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
