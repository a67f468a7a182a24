use std::io::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::engine::Standings;
use crate::registry::User;
use crate::rules::{BonusKind, Grade, Weekday};

pub const REMOVED_HEADER: &str = "Removed player";
pub const REMOVED_SEPARATOR: &str = "==============";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format one user as "NAME : {name}, POINT : {points}, GRADE : {grade}"
pub fn format_summary(user: &User) -> String {
    format!(
        "NAME : {}, POINT : {}, GRADE : {}",
        user.name(),
        user.points(),
        user.grade()
    )
}

fn format_summary_colored(user: &User) -> String {
    let grade = match user.grade() {
        Grade::Gold => user.grade().yellow().bold().to_string(),
        Grade::Silver => user.grade().bright_white().bold().to_string(),
        Grade::Normal => user.grade().dimmed().to_string(),
    };
    format!(
        "NAME : {}, POINT : {}, GRADE : {}",
        user.name(),
        user.points(),
        grade
    )
}

/// Summary line, with the grade tinted when `use_colors` is set
pub fn format_report_line(user: &User, use_colors: bool) -> String {
    if use_colors {
        format_summary_colored(user)
    } else {
        format_summary(user)
    }
}

/// Names of removed players, in id order
pub fn removed_players(standings: &Standings) -> Vec<&str> {
    standings.removed_players().map(|u| u.name()).collect()
}

/// Removed-player header followed by one name per line
pub fn format_removed(standings: &Standings) -> String {
    let mut lines = vec![REMOVED_HEADER, REMOVED_SEPARATOR];
    lines.extend(removed_players(standings));
    lines.join("\n")
}

/// Full text report: one summary line per user, a blank line, then the removed list.
pub fn format_report(standings: &Standings, use_colors: bool) -> String {
    let mut lines: Vec<String> = standings
        .users()
        .iter()
        .map(|user| format_report_line(user, use_colors))
        .collect();

    lines.push(String::new());
    lines.push(format_removed(standings));
    lines.join("\n")
}

/// Multi-line breakdown of one user (for verbose mode)
pub fn format_user_detail(user: &User) -> String {
    let days = Weekday::ALL
        .iter()
        .map(|day| format!("{}={}", &day.as_str()[..3], user.attendance_on(*day)))
        .collect::<Vec<_>>()
        .join(" ");

    let bonuses = if user.bonuses().is_empty() {
        "none".to_string()
    } else {
        user.bonuses()
            .iter()
            .map(BonusKind::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "  Id: {}\n  Days: {}\n  Wednesday: {}  Weekend: {}\n  Bonuses: {}",
        user.id(),
        days,
        user.wednesday_count(),
        user.weekend_count(),
        bonuses
    )
}

#[derive(Serialize)]
struct JsonUser<'a> {
    id: u32,
    name: &'a str,
    points: u32,
    grade: Grade,
    attendance: &'a [u32],
    wednesday_count: u32,
    weekend_count: u32,
    bonuses: &'a [BonusKind],
}

#[derive(Serialize)]
struct JsonReport<'a> {
    users: Vec<JsonUser<'a>>,
    removed: Vec<&'a str>,
}

/// Format the report as pretty-printed JSON
pub fn format_json(standings: &Standings) -> serde_json::Result<String> {
    let report = JsonReport {
        users: standings
            .users()
            .iter()
            .map(|u| JsonUser {
                id: u.id().get(),
                name: u.name(),
                points: u.points(),
                grade: u.grade(),
                attendance: u.attendance(),
                wednesday_count: u.wednesday_count(),
                weekend_count: u.weekend_count(),
                bonuses: u.bonuses(),
            })
            .collect(),
        removed: removed_players(standings),
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AttendanceBook;

    fn sample_standings() -> Standings {
        let mut book = AttendanceBook::default();
        for line in ["user1 monday", "user1 monday", "user2 wednesday", "user3 friday"] {
            book.record_line(line).unwrap();
        }
        book.finalize()
    }

    #[test]
    fn test_format_summary() {
        let standings = sample_standings();
        let user = standings.by_name("user2").unwrap();
        assert_eq!(format_summary(user), "NAME : user2, POINT : 3, GRADE : NORMAL");
    }

    #[test]
    fn test_format_summary_gold() {
        let mut book = AttendanceBook::default();
        for _ in 0..25 {
            book.record("star", "sunday").unwrap();
        }
        let standings = book.finalize();
        let user = standings.by_name("star").unwrap();
        assert_eq!(format_summary(user), "NAME : star, POINT : 60, GRADE : GOLD");
    }

    #[test]
    fn test_format_report_plain() {
        let report = format_report(&sample_standings(), false);
        let expected = "\
NAME : user1, POINT : 2, GRADE : NORMAL
NAME : user2, POINT : 3, GRADE : NORMAL
NAME : user3, POINT : 1, GRADE : NORMAL

Removed player
==============
user1
user3";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_format_report_empty() {
        let standings = AttendanceBook::default().finalize();
        assert_eq!(
            format_report(&standings, false),
            "\nRemoved player\n=============="
        );
    }

    #[test]
    fn test_format_removed() {
        assert_eq!(
            format_removed(&sample_standings()),
            "Removed player\n==============\nuser1\nuser3"
        );
    }

    #[test]
    fn test_plain_report_line_has_no_escapes() {
        let standings = sample_standings();
        let line = format_report_line(standings.by_name("user3").unwrap(), false);
        assert!(!line.contains('\u{1b}'));
        assert_eq!(line, "NAME : user3, POINT : 1, GRADE : NORMAL");
    }

    #[test]
    fn test_colored_line_only_tints_grade() {
        let standings = sample_standings();
        let line = format_report_line(standings.by_name("user1").unwrap(), true);
        assert!(line.starts_with("NAME : user1, POINT : 2, GRADE : \u{1b}["));
        assert!(line.contains("NORMAL"));
    }

    #[test]
    fn test_removed_players() {
        assert_eq!(removed_players(&sample_standings()), vec!["user1", "user3"]);
    }

    #[test]
    fn test_format_user_detail() {
        let standings = sample_standings();
        let detail = format_user_detail(standings.by_name("user1").unwrap());
        assert!(detail.contains("Id: 1"));
        assert!(detail.contains("mon=2 tue=0 wed=0"));
        assert!(detail.contains("Bonuses: none"));
    }

    #[test]
    fn test_format_json() {
        let json = format_json(&sample_standings()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["users"][0]["name"], "user1");
        assert_eq!(value["users"][0]["points"], 2);
        assert_eq!(value["users"][1]["grade"], "NORMAL");
        assert_eq!(value["users"][1]["attendance"][2], 1);
        assert_eq!(value["removed"], serde_json::json!(["user1", "user3"]));
    }
}
