//! History view over logged sets.
//!
//! Orders and limits the log collection, applies the exercise filter and
//! annotates each entry with its personal-record status.

use chrono::{DateTime, Datelike, Utc};

use crate::domain::WorkoutLog;
use crate::records::{compute_bests, is_personal_record, percent_of_best};

/// Number of most recent logs the history works with.
pub const RECENT_LOG_LIMIT: usize = 100;

/// Which exercises to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HistoryFilter {
    #[default]
    All,
    Exercise(String),
}

impl HistoryFilter {
    /// Returns true if the log passes the filter.
    pub fn matches(&self, log: &WorkoutLog) -> bool {
        match self {
            HistoryFilter::All => true,
            HistoryFilter::Exercise(name) => log.exercise == *name,
        }
    }
}

impl From<Option<String>> for HistoryFilter {
    fn from(exercise: Option<String>) -> Self {
        exercise.map_or(HistoryFilter::All, HistoryFilter::Exercise)
    }
}

/// A log annotated for display.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry<'a> {
    pub log: &'a WorkoutLog,
    pub is_pr: bool,
    pub percent_of_best: f64,
    pub when: String,
}

/// Returns the most recent logs, newest first, limited to [`RECENT_LOG_LIMIT`].
pub fn recent(logs: &[WorkoutLog]) -> Vec<WorkoutLog> {
    let mut sorted = logs.to_vec();
    // stable: logs sharing a timestamp keep their stored order
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(RECENT_LOG_LIMIT);
    sorted
}

/// Builds the annotated history.
///
/// Records are computed over every log passed in, before filtering, so a
/// filtered view still flags records and percentages against the full set.
pub fn build_history<'a>(
    logs: &'a [WorkoutLog],
    filter: &HistoryFilter,
    now: DateTime<Utc>,
) -> Vec<HistoryEntry<'a>> {
    let bests = compute_bests(logs);

    logs.iter()
        .filter(|log| filter.matches(log))
        .map(|log| HistoryEntry {
            log,
            is_pr: is_personal_record(log, &bests),
            percent_of_best: percent_of_best(log.calculated_one_rm, &log.exercise, &bests),
            when: format_relative_date(log.date, now),
        })
        .collect()
}

/// Formats a log date relative to `now`.
///
/// "Today", "Yesterday" and "N days ago" within a week, then "Mon D", with
/// the year appended when it differs from the current one. Dates in the
/// future count as today.
pub fn format_relative_date(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - date).num_days();

    match days {
        ..=0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{} days ago", days),
        _ if date.year() != now.year() => date.format("%b %-d, %Y").to_string(),
        _ => date.format("%b %-d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn make_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    fn make_log(id: &str, exercise: &str, one_rm: f64, date: DateTime<Utc>) -> WorkoutLog {
        WorkoutLog::new(id, exercise, one_rm, 1, date, one_rm)
    }

    #[test]
    fn test_recent_sorts_newest_first() {
        let logs = vec![
            make_log("a", "Squat", 100.0, make_date(2024, 1, 1)),
            make_log("b", "Squat", 110.0, make_date(2024, 3, 1)),
            make_log("c", "Squat", 105.0, make_date(2024, 2, 1)),
        ];

        let ids: Vec<String> = recent(&logs).into_iter().map(|l| l.id).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_recent_limit() {
        let start = make_date(2024, 1, 1);
        let logs: Vec<WorkoutLog> = (0..150i64)
            .map(|i| make_log(&i.to_string(), "Squat", 100.0, start + Duration::days(i)))
            .collect();

        let kept = recent(&logs);
        assert_eq!(kept.len(), RECENT_LOG_LIMIT);
        assert_eq!(kept[0].id, "149");
        assert_eq!(kept[RECENT_LOG_LIMIT - 1].id, "50");
    }

    #[test]
    fn test_build_history_flags_records() {
        let now = make_date(2024, 3, 10);
        let logs = vec![
            make_log("a", "Squat", 210.0, make_date(2024, 3, 10)),
            make_log("b", "Squat", 225.0, make_date(2024, 3, 9)),
            make_log("c", "Bench Press", 140.0, make_date(2024, 3, 8)),
            make_log("d", "Squat", 200.0, make_date(2024, 3, 1)),
        ];

        let history = build_history(&logs, &HistoryFilter::All, now);
        assert_eq!(history.len(), 4);

        assert!(!history[0].is_pr);
        assert!((history[0].percent_of_best - 93.333).abs() < 0.001);
        assert_eq!(history[0].when, "Today");

        assert!(history[1].is_pr);
        assert_eq!(history[1].percent_of_best, 100.0);
        assert_eq!(history[1].when, "Yesterday");

        assert!(history[2].is_pr);
        assert_eq!(history[2].when, "2 days ago");
        assert_eq!(history[3].when, "Mar 1");
    }

    #[test]
    fn test_build_history_filter() {
        let now = make_date(2024, 3, 10);
        let logs = vec![
            make_log("a", "Squat", 210.0, now),
            make_log("b", "Bench Press", 140.0, now),
            make_log("c", "Squat", 225.0, now),
        ];

        let filter = HistoryFilter::from(Some("Squat".to_string()));
        let history = build_history(&logs, &filter, now);
        let ids: Vec<&str> = history.iter().map(|e| e.log.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(history[1].is_pr);

        let none = build_history(&logs, &HistoryFilter::Exercise("squat".into()), now);
        assert!(none.is_empty());
    }

    #[test]
    fn test_build_history_empty() {
        assert!(build_history(&[], &HistoryFilter::All, make_date(2024, 1, 1)).is_empty());
    }

    #[test]
    fn test_format_relative_date() {
        let now = make_date(2024, 6, 15);

        assert_eq!(format_relative_date(now, now), "Today");
        assert_eq!(
            format_relative_date(now - Duration::hours(23), now),
            "Today"
        );
        assert_eq!(format_relative_date(now - Duration::days(1), now), "Yesterday");
        assert_eq!(format_relative_date(now - Duration::days(6), now), "6 days ago");
        assert_eq!(format_relative_date(now - Duration::days(7), now), "Jun 8");
        assert_eq!(format_relative_date(make_date(2023, 12, 25), now), "Dec 25, 2023");
    }

    #[test]
    fn test_format_relative_date_future() {
        let now = make_date(2024, 6, 15);
        assert_eq!(format_relative_date(now + Duration::days(3), now), "Today");
    }
}
