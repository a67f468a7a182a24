use serde::Serialize;
use std::fmt;

use crate::error::AttendanceError;

pub const DAILY_POINT: u32 = 1;
pub const WEDNESDAY_POINT: u32 = 3;
pub const WEEKEND_POINT: u32 = 2;

/// Number of per-day attendance slots kept for every user.
pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; DAYS_PER_WEEK] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Case-sensitive match against the lowercase English day names.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "monday" => Some(Weekday::Monday),
            "tuesday" => Some(Weekday::Tuesday),
            "wednesday" => Some(Weekday::Wednesday),
            "thursday" => Some(Weekday::Thursday),
            "friday" => Some(Weekday::Friday),
            "saturday" => Some(Weekday::Saturday),
            "sunday" => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Attendance slot index, Monday = 0 through Sunday = 6
    pub fn slot(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    pub fn category(self) -> DayCategory {
        match self {
            Weekday::Wednesday => DayCategory::Wednesday,
            Weekday::Saturday | Weekday::Sunday => DayCategory::Weekend,
            _ => DayCategory::Plain,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bonus-relevant classification of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCategory {
    Plain,
    Wednesday,
    Weekend,
}

/// What a single attendance on `day` is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRule {
    pub day: Weekday,
    pub slot: usize,
    pub points: u32,
    pub category: DayCategory,
}

/// Point table for the seven days, one value per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRuleSet {
    daily_points: u32,
    wednesday_points: u32,
    weekend_points: u32,
}

impl Default for DayRuleSet {
    fn default() -> Self {
        Self::new(DAILY_POINT, WEDNESDAY_POINT, WEEKEND_POINT)
    }
}

impl DayRuleSet {
    pub fn new(daily_points: u32, wednesday_points: u32, weekend_points: u32) -> Self {
        Self {
            daily_points,
            wednesday_points,
            weekend_points,
        }
    }

    pub fn rule_for(&self, day: Weekday) -> DayRule {
        let category = day.category();
        let points = match category {
            DayCategory::Plain => self.daily_points,
            DayCategory::Wednesday => self.wednesday_points,
            DayCategory::Weekend => self.weekend_points,
        };
        DayRule {
            day,
            slot: day.slot(),
            points,
            category,
        }
    }

    pub fn lookup(&self, token: &str) -> Result<DayRule, AttendanceError> {
        Weekday::parse(token)
            .map(|day| self.rule_for(day))
            .ok_or_else(|| AttendanceError::UnknownDay {
                token: token.to_string(),
            })
    }
}
