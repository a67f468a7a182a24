use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::error::AttendanceError;
use crate::rules::bonus::BonusKind;
use crate::rules::day::{Weekday, DAYS_PER_WEEK};
use crate::rules::grade::Grade;

/// Default upper bound on distinct users in a single run.
pub const MAX_USERS: usize = 100;

/// Sequential user identifier, starting at 1 in order of first sighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(u32);

impl UserId {
    pub fn get(self) -> u32 {
        self.0
    }

    fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything recorded about one attendee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    pub(crate) attendance: [u32; DAYS_PER_WEEK],
    pub(crate) points: u32,
    pub(crate) wednesday_count: u32,
    pub(crate) weekend_count: u32,
    pub(crate) grade: Grade,
    pub(crate) bonuses: Vec<BonusKind>,
}

impl User {
    fn new(id: UserId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            attendance: [0; DAYS_PER_WEEK],
            points: 0,
            wednesday_count: 0,
            weekend_count: 0,
            grade: Grade::Normal,
            bonuses: Vec::new(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// Per-day counts, Monday first
    pub fn attendance(&self) -> &[u32; DAYS_PER_WEEK] {
        &self.attendance
    }

    pub fn attendance_on(&self, day: Weekday) -> u32 {
        self.attendance[day.slot()]
    }

    pub fn wednesday_count(&self) -> u32 {
        self.wednesday_count
    }

    pub fn weekend_count(&self) -> u32 {
        self.weekend_count
    }

    /// Bonuses awarded at finalization, in evaluation order
    pub fn bonuses(&self) -> &[BonusKind] {
        &self.bonuses
    }

    /// True when the user never attended on a bonus-eligible day.
    pub fn has_no_bonus_attendance(&self) -> bool {
        self.wednesday_count == 0 && self.weekend_count == 0
    }
}

/// Owns every user record and the name to id mapping.
///
/// Ids are handed out sequentially from 1 and never reused; a name always
/// resolves to the id it was first given.
#[derive(Debug, Clone)]
pub struct UserRegistry {
    users: Vec<User>,
    ids: HashMap<String, UserId>,
    max_users: usize,
}

impl Default for UserRegistry {
    fn default() -> Self {
        Self::new(MAX_USERS)
    }
}

impl UserRegistry {
    pub fn new(max_users: usize) -> Self {
        Self {
            users: Vec::new(),
            ids: HashMap::new(),
            max_users,
        }
    }

    pub fn max_users(&self) -> usize {
        self.max_users
    }

    pub fn resolve_or_create(&mut self, name: &str) -> Result<UserId, AttendanceError> {
        self.entry(name).map(|user| user.id())
    }

    /// Look up `name`, registering it first if it has not been seen.
    pub(crate) fn entry(&mut self, name: &str) -> Result<&mut User, AttendanceError> {
        let id = match self.ids.get(name) {
            Some(&id) => id,
            None => {
                if self.users.len() >= self.max_users {
                    return Err(AttendanceError::CapacityExceeded {
                        max: self.max_users,
                    });
                }
                let id = UserId(self.users.len() as u32 + 1);
                self.users.push(User::new(id, name));
                self.ids.insert(name.to_string(), id);
                tracing::debug!(user = name, id = id.get(), "registered user");
                id
            }
        };
        Ok(&mut self.users[id.index()])
    }

    pub fn id_of(&self, name: &str) -> Option<UserId> {
        self.ids.get(name).copied()
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.get(id.index())
    }

    pub fn get_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.get_mut(id.index())
    }

    pub fn by_name(&self, name: &str) -> Option<&User> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    /// Users in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut User> {
        self.users.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub(crate) fn into_users(self) -> Vec<User> {
        self.users
    }
}
