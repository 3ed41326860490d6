//! Personal-record tracking over logged sets.
//!
//! The record table is a derived view: it is rebuilt from the log collection
//! whenever that collection changes and is never updated incrementally.

use std::collections::HashMap;

use crate::domain::WorkoutLog;

/// Best estimated 1RM per exercise name (case-sensitive).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonalRecords {
    bests: HashMap<String, f64>,
}

impl PersonalRecords {
    /// Returns the best 1RM for an exercise, if any set has been logged.
    pub fn best(&self, exercise: &str) -> Option<f64> {
        self.bests.get(exercise).copied()
    }

    /// Returns the number of exercises with a record.
    pub fn len(&self) -> usize {
        self.bests.len()
    }

    /// Returns true if no records exist.
    pub fn is_empty(&self) -> bool {
        self.bests.is_empty()
    }

    /// Returns an iterator over (exercise, best 1RM) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.bests.iter().map(|(name, best)| (name.as_str(), *best))
    }
}

/// Computes the best 1RM per exercise in a single pass.
///
/// Only a strictly greater value replaces the current best.
pub fn compute_bests<'a, I>(logs: I) -> PersonalRecords
where
    I: IntoIterator<Item = &'a WorkoutLog>,
{
    let mut bests: HashMap<String, f64> = HashMap::new();

    for log in logs {
        match bests.get_mut(&log.exercise) {
            Some(best) if log.calculated_one_rm > *best => *best = log.calculated_one_rm,
            Some(_) => {}
            None => {
                bests.insert(log.exercise.clone(), log.calculated_one_rm);
            }
        }
    }

    PersonalRecords { bests }
}

/// Returns true if this log holds the record for its exercise.
///
/// Compares the stored 1RM exactly; the value must not be recomputed.
pub fn is_personal_record(log: &WorkoutLog, bests: &PersonalRecords) -> bool {
    bests.best(&log.exercise) == Some(log.calculated_one_rm)
}

/// Returns `one_rm` as a percentage of the exercise's best.
///
/// Returns 100 when the exercise has no record yet.
pub fn percent_of_best(one_rm: f64, exercise: &str, bests: &PersonalRecords) -> f64 {
    match bests.best(exercise) {
        Some(best) if best != 0.0 => one_rm / best * 100.0,
        _ => 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_log(exercise: &str, one_rm: f64) -> WorkoutLog {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        WorkoutLog::new(format!("{exercise}-{one_rm}"), exercise, one_rm, 1, date, one_rm)
    }

    #[test]
    fn test_compute_bests_keeps_max() {
        let logs = vec![
            make_log("Squat", 200.0),
            make_log("Squat", 225.0),
            make_log("Squat", 210.0),
        ];

        let bests = compute_bests(&logs);
        assert_eq!(bests.best("Squat"), Some(225.0));
        assert_eq!(bests.len(), 1);
    }

    #[test]
    fn test_compute_bests_per_exercise() {
        let logs = vec![
            make_log("Squat", 200.0),
            make_log("Bench Press", 140.0),
            make_log("Bench Press", 150.0),
        ];

        let bests = compute_bests(&logs);
        assert_eq!(bests.best("Squat"), Some(200.0));
        assert_eq!(bests.best("Bench Press"), Some(150.0));
        assert_eq!(bests.best("Deadlift"), None);
    }

    #[test]
    fn test_compute_bests_is_case_sensitive() {
        let logs = vec![make_log("Squat", 200.0), make_log("squat", 300.0)];
        let bests = compute_bests(&logs);
        assert_eq!(bests.best("Squat"), Some(200.0));
        assert_eq!(bests.best("squat"), Some(300.0));
    }

    #[test]
    fn test_compute_bests_empty() {
        let logs: Vec<WorkoutLog> = Vec::new();
        assert!(compute_bests(&logs).is_empty());
    }

    #[test]
    fn test_is_personal_record() {
        let logs = vec![
            make_log("Squat", 200.0),
            make_log("Squat", 225.0),
            make_log("Squat", 210.0),
        ];
        let bests = compute_bests(&logs);

        assert!(is_personal_record(&logs[1], &bests));
        assert!(!is_personal_record(&logs[0], &bests));
        assert!(!is_personal_record(&make_log("Deadlift", 225.0), &bests));
    }

    #[test]
    fn test_is_personal_record_exact_equality() {
        let logs = vec![make_log("Squat", 116.666_666_666_666_67)];
        let bests = compute_bests(&logs);
        assert!(!is_personal_record(&make_log("Squat", 116.666_666_666_666), &bests));
    }

    #[test]
    fn test_percent_of_best() {
        let logs = vec![
            make_log("Squat", 200.0),
            make_log("Squat", 225.0),
            make_log("Squat", 210.0),
        ];
        let bests = compute_bests(&logs);

        let pct = percent_of_best(210.0, "Squat", &bests);
        assert!((pct - 93.333).abs() < 0.001);
        assert_eq!(percent_of_best(225.0, "Squat", &bests), 100.0);
    }

    #[test]
    fn test_percent_of_best_without_record() {
        let bests = PersonalRecords::default();
        assert_eq!(percent_of_best(180.0, "Unknown", &bests), 100.0);
    }
}
