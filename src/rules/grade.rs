use serde::Serialize;
use std::fmt;

pub const GOLD_GRADE_POINT: u32 = 50;
pub const SILVER_GRADE_POINT: u32 = 30;

/// Membership tier, ordered lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Grade {
    #[default]
    Normal,
    Silver,
    Gold,
}

impl Grade {
    pub fn as_str(self) -> &'static str {
        match self {
            Grade::Normal => "NORMAL",
            Grade::Silver => "SILVER",
            Grade::Gold => "GOLD",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point thresholds for each tier. Lower bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradePolicy {
    gold: u32,
    silver: u32,
}

impl Default for GradePolicy {
    fn default() -> Self {
        Self::new(GOLD_GRADE_POINT, SILVER_GRADE_POINT)
    }
}

impl GradePolicy {
    pub fn new(gold: u32, silver: u32) -> Self {
        Self { gold, silver }
    }

    pub fn classify(&self, points: u32) -> Grade {
        if points >= self.gold {
            Grade::Gold
        } else if points >= self.silver {
            Grade::Silver
        } else {
            Grade::Normal
        }
    }
}
