use tracing::{debug, info, warn};

use crate::error::AttendanceError;
use crate::registry::{User, UserId, UserRegistry};
use crate::rules::{BonusRule, DayCategory, DayRule, Grade, Rules};
use crate::source::{parse_line, LogSource};

/// Line counts from one ingestion pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub lines: usize,
    pub recorded: usize,
    pub skipped: usize,
}

/// Accumulates attendance events until the stream ends.
///
/// `finalize` consumes the book, so bonuses and grades are applied exactly
/// once per run.
#[derive(Debug, Clone)]
pub struct AttendanceBook {
    registry: UserRegistry,
    rules: Rules,
}

impl Default for AttendanceBook {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

impl AttendanceBook {
    pub fn new(rules: Rules) -> Self {
        Self {
            registry: UserRegistry::new(rules.max_users),
            rules,
        }
    }

    pub fn registry(&self) -> &UserRegistry {
        &self.registry
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Record one attendance of `name` on `day`.
    ///
    /// The user is registered before the day is checked, so an unknown day
    /// still leaves a zero-point entry behind. Nothing else is touched on error.
    pub fn record(&mut self, name: &str, day: &str) -> Result<UserId, AttendanceError> {
        let user = self.registry.entry(name)?;
        let rule = self.rules.days.lookup(day)?;
        apply_day_rule(user, &rule);
        debug!(
            user = name,
            day = %rule.day,
            points = rule.points,
            total = user.points,
            "recorded attendance"
        );
        Ok(user.id())
    }

    pub fn record_line(&mut self, line: &str) -> Result<UserId, AttendanceError> {
        let event = parse_line(line)?;
        self.record(&event.user, &event.day)
    }

    /// Feed every line of `source` through `record_line`.
    ///
    /// Malformed lines and unknown days are logged and skipped. Capacity and
    /// read failures stop ingestion; lines already recorded stay valid.
    pub fn ingest<R: std::io::BufRead>(
        &mut self,
        source: LogSource<R>,
    ) -> Result<IngestStats, AttendanceError> {
        let mut stats = IngestStats::default();
        for line in source.lines() {
            let line = line?;
            stats.lines += 1;
            match line.and_then(|line| self.record_line(&line)) {
                Ok(_) => stats.recorded += 1,
                Err(e) if e.is_recoverable() => {
                    warn!("{}", e);
                    stats.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }
        info!(
            lines = stats.lines,
            recorded = stats.recorded,
            skipped = stats.skipped,
            users = self.registry.len(),
            "ingestion complete"
        );
        Ok(stats)
    }

    /// Award bonuses, then assign grades, for every user in id order.
    pub fn finalize(mut self) -> Standings {
        for user in self.registry.iter_mut() {
            let awarded = BonusRule::All.apply(user, &self.rules.bonus);
            user.grade = self.rules.grades.classify(user.points);
            debug!(
                user = user.name(),
                points = user.points,
                grade = %user.grade,
                bonuses = awarded.len(),
                "finalized user"
            );
        }
        Standings {
            users: self.registry.into_users(),
        }
    }
}

/// Apply one valid attendance to `user`.
fn apply_day_rule(user: &mut User, rule: &DayRule) {
    let slot = &mut user.attendance[rule.slot];
    *slot = slot.saturating_add(1);
    user.points = user.points.saturating_add(rule.points);
    match rule.category {
        DayCategory::Wednesday => user.wednesday_count = user.wednesday_count.saturating_add(1),
        DayCategory::Weekend => user.weekend_count = user.weekend_count.saturating_add(1),
        DayCategory::Plain => {}
    }
}

/// Final per-user results, in ascending id order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standings {
    users: Vec<User>,
}

impl Standings {
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn by_name(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.name() == name)
    }

    /// Users still at NORMAL who never attended a bonus-eligible day.
    pub fn removed_players(&self) -> impl Iterator<Item = &User> {
        self.users
            .iter()
            .filter(|u| u.grade() == Grade::Normal && u.has_no_bonus_attendance())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Read, score, and grade the log at `path`.
pub fn run(
    path: &std::path::Path,
    rules: Rules,
) -> Result<(Standings, IngestStats), AttendanceError> {
    let mut book = AttendanceBook::new(rules);
    let stats = book.ingest(LogSource::open(path)?)?;
    Ok((book.finalize(), stats))
}
