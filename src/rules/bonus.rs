use serde::Serialize;
use std::fmt;

use super::day::Weekday;
use crate::registry::User;

/// Category attendances needed before a bonus is paid.
pub const BONUS_ATTENDANCE_COUNT: u32 = 10;
/// Flat award for each bonus that fires.
pub const BONUS_POINTS: u32 = 10;

/// A bonus that was actually awarded to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BonusKind {
    Wednesday,
    Weekend,
}

impl fmt::Display for BonusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BonusKind::Wednesday => f.write_str("wednesday"),
            BonusKind::Weekend => f.write_str("weekend"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusPolicy {
    attendance_count: u32,
    points: u32,
}

impl Default for BonusPolicy {
    fn default() -> Self {
        Self::new(BONUS_ATTENDANCE_COUNT, BONUS_POINTS)
    }
}

impl BonusPolicy {
    pub fn new(attendance_count: u32, points: u32) -> Self {
        Self {
            attendance_count,
            points,
        }
    }

    pub fn attendance_count(&self) -> u32 {
        self.attendance_count
    }

    pub fn points(&self) -> u32 {
        self.points
    }
}

/// Which bonus categories to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusRule {
    Wednesday,
    Weekend,
    /// Both of the above, each judged on its own.
    All,
}

impl BonusRule {
    /// Award every bonus this rule grants `user` and return what was awarded.
    ///
    /// Not idempotent: applying twice pays twice. Finalization calls it once.
    pub fn apply(self, user: &mut User, policy: &BonusPolicy) -> Vec<BonusKind> {
        let mut awarded = Vec::new();
        for kind in self.kinds() {
            if qualifying_count(user, *kind) >= policy.attendance_count {
                user.points = user.points.saturating_add(policy.points);
                user.bonuses.push(*kind);
                awarded.push(*kind);
            }
        }
        awarded
    }

    fn kinds(self) -> &'static [BonusKind] {
        match self {
            BonusRule::Wednesday => &[BonusKind::Wednesday],
            BonusRule::Weekend => &[BonusKind::Weekend],
            BonusRule::All => &[BonusKind::Wednesday, BonusKind::Weekend],
        }
    }
}

fn qualifying_count(user: &User, kind: BonusKind) -> u32 {
    match kind {
        BonusKind::Wednesday => user.attendance_on(Weekday::Wednesday),
        BonusKind::Weekend => {
            user.attendance_on(Weekday::Saturday)
                .saturating_add(user.attendance_on(Weekday::Sunday))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::UserRegistry;

    fn user_with(days: &[(Weekday, u32)]) -> User {
        let mut registry = UserRegistry::default();
        let user = registry.entry("bonus_user").unwrap();
        for &(day, count) in days {
            user.attendance[day.slot()] = count;
        }
        user.clone()
    }

    #[test]
    fn test_wednesday_bonus_at_threshold() {
        let mut user = user_with(&[(Weekday::Wednesday, 10)]);
        let awarded = BonusRule::Wednesday.apply(&mut user, &BonusPolicy::default());
        assert_eq!(awarded, vec![BonusKind::Wednesday]);
        assert_eq!(user.points(), BONUS_POINTS);
    }

    #[test]
    fn test_wednesday_bonus_below_threshold() {
        let mut user = user_with(&[(Weekday::Wednesday, 9)]);
        let awarded = BonusRule::Wednesday.apply(&mut user, &BonusPolicy::default());
        assert!(awarded.is_empty());
        assert_eq!(user.points(), 0);
    }

    #[test]
    fn test_weekend_bonus_sums_saturday_and_sunday() {
        let mut user = user_with(&[(Weekday::Saturday, 5), (Weekday::Sunday, 5)]);
        let awarded = BonusRule::Weekend.apply(&mut user, &BonusPolicy::default());
        assert_eq!(awarded, vec![BonusKind::Weekend]);
        assert_eq!(user.points(), BONUS_POINTS);

        let mut short = user_with(&[(Weekday::Saturday, 4), (Weekday::Sunday, 5)]);
        assert!(BonusRule::Weekend
            .apply(&mut short, &BonusPolicy::default())
            .is_empty());
        assert_eq!(short.points(), 0);
    }

    #[test]
    fn test_all_fires_each_independently() {
        let policy = BonusPolicy::default();

        let mut both = user_with(&[(Weekday::Wednesday, 10), (Weekday::Sunday, 10)]);
        assert_eq!(
            BonusRule::All.apply(&mut both, &policy),
            vec![BonusKind::Wednesday, BonusKind::Weekend]
        );
        assert_eq!(both.points(), BONUS_POINTS * 2);

        let mut weekend_only = user_with(&[(Weekday::Wednesday, 3), (Weekday::Saturday, 12)]);
        assert_eq!(
            BonusRule::All.apply(&mut weekend_only, &policy),
            vec![BonusKind::Weekend]
        );

        let mut neither = user_with(&[(Weekday::Monday, 30)]);
        assert!(BonusRule::All.apply(&mut neither, &policy).is_empty());
        assert_eq!(neither.points(), 0);
    }

    #[test]
    fn test_repeated_apply_pays_again() {
        let mut user = user_with(&[(Weekday::Wednesday, 10)]);
        let policy = BonusPolicy::default();
        BonusRule::Wednesday.apply(&mut user, &policy);
        BonusRule::Wednesday.apply(&mut user, &policy);
        assert_eq!(user.points(), BONUS_POINTS * 2);
    }

    #[test]
    fn test_award_saturates_at_max_points() {
        let mut user = user_with(&[(Weekday::Saturday, u32::MAX), (Weekday::Sunday, 1)]);
        user.points = u32::MAX - 5;
        let awarded = BonusRule::All.apply(&mut user, &BonusPolicy::new(10, u32::MAX));
        assert_eq!(awarded, vec![BonusKind::Weekend]);
        assert_eq!(user.points(), u32::MAX);
    }

    #[test]
    fn test_custom_policy() {
        let mut user = user_with(&[(Weekday::Wednesday, 3)]);
        let awarded = BonusRule::Wednesday.apply(&mut user, &BonusPolicy::new(3, 25));
        assert_eq!(awarded, vec![BonusKind::Wednesday]);
        assert_eq!(user.points(), 25);
    }
}
