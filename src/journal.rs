//! JSON journal holding the exercise list and logged sets.
//!
//! The journal document holds one user's data:
//! `{ "exercises": [...], "logs": [...] }`. Malformed log entries are skipped
//! with a warning rather than failing the whole load, and are written back
//! untouched on save.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::classifier::classify;
use crate::domain::{Set, WorkoutLog};
use crate::error::JournalError;
use crate::estimate::{EstimationResult, estimate_set};
use crate::exercises::ExerciseList;
use crate::history::recent;
use crate::records::{PersonalRecords, compute_bests};

/// Expected top-level keys.
const KEY_EXERCISES: &str = "exercises";
const KEY_LOGS: &str = "logs";

/// Exercise list and logged sets for one user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Journal {
    pub exercises: ExerciseList,
    pub logs: Vec<WorkoutLog>,
    /// Raw log entries that failed to parse on load.
    skipped: Vec<Value>,
}

#[derive(Serialize)]
struct JournalDocument<'a> {
    exercises: &'a ExerciseList,
    logs: Vec<Value>,
}

/// Outcome of recording a set.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub log: WorkoutLog,
    pub estimate: EstimationResult,
    /// True if the set beats every earlier recent log of the exercise.
    pub is_new_record: bool,
}

impl Journal {
    /// Loads a journal from disk.
    ///
    /// A missing file yields the default exercises and no logs.
    ///
    /// # Errors
    /// Returns JournalError if the file cannot be read or is not a JSON object.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, JournalError> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path).map_err(|source| JournalError::CannotRead {
            path: path.to_path_buf(),
            source,
        })?;

        let root: Value =
            serde_json::from_str(&text).map_err(|e| JournalError::InvalidFormat {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let invalid = |reason: &str| JournalError::InvalidFormat {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };

        let Value::Object(mut doc) = root else {
            return Err(invalid("top level must be an object"));
        };

        let exercises = match doc.remove(KEY_EXERCISES) {
            None | Some(Value::Null) => ExerciseList::default(),
            Some(value) => serde_json::from_value(value)
                .map_err(|e| invalid(&format!("bad exercise list: {}", e)))?,
        };

        let entries = match doc.remove(KEY_LOGS) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(entries)) => entries,
            Some(_) => return Err(invalid("logs must be an array")),
        };

        let mut logs = Vec::with_capacity(entries.len());
        let mut skipped = Vec::new();
        for (idx, entry) in entries.into_iter().enumerate() {
            match parse_log(&entry) {
                Ok(log) => logs.push(log),
                Err(reason) => {
                    warn!("skipping log entry {}: {}", idx, reason);
                    skipped.push(entry);
                }
            }
        }

        Ok(Self {
            exercises,
            logs,
            skipped,
        })
    }

    /// Log entries that were skipped on load, as read from disk.
    pub fn skipped_entries(&self) -> &[Value] {
        &self.skipped
    }

    /// Writes the journal as pretty-printed JSON, creating parent directories.
    ///
    /// The document goes to a sibling `.tmp` file first and is renamed over
    /// `path`, so a failed write leaves the previous journal intact. Skipped
    /// entries follow the parsed logs.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), JournalError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| JournalError::CannotWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut logs = self
            .logs
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        logs.extend(self.skipped.iter().cloned());

        let doc = JournalDocument {
            exercises: &self.exercises,
            logs,
        };
        let text = serde_json::to_string_pretty(&doc)?;

        let tmp = temp_path(path);
        if let Err(source) = fs::write(&tmp, text) {
            let _ = fs::remove_file(&tmp);
            return Err(JournalError::CannotWrite { path: tmp, source });
        }

        fs::rename(&tmp, path).map_err(|source| {
            let _ = fs::remove_file(&tmp);
            JournalError::CannotWrite {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    /// Returns the most recent logs, newest first.
    pub fn recent_logs(&self) -> Vec<WorkoutLog> {
        recent(&self.logs)
    }

    /// Computes personal records over the recent logs.
    pub fn personal_records(&self) -> PersonalRecords {
        compute_bests(&self.recent_logs())
    }

    /// Records a set for an exercise in the exercise list.
    ///
    /// The category comes from the set, or is classified from the exercise
    /// name when absent. The estimated 1RM is stored verbatim on the log.
    pub fn record(
        &mut self,
        exercise: &str,
        set: Set,
        sets: Option<u32>,
        date: DateTime<Utc>,
    ) -> Result<Recorded, JournalError> {
        let exercise = exercise.trim();
        if !self.exercises.contains(exercise) {
            return Err(JournalError::UnknownExercise(exercise.to_string()));
        }

        let set = Set {
            category: set.category.or_else(|| Some(classify(exercise))),
            ..set
        };
        let estimate = estimate_set(&set)?;

        let previous_best = self.personal_records().best(exercise);
        let is_new_record = previous_best.is_none_or(|best| estimate.one_rm > best);

        let log = WorkoutLog {
            sets,
            ..WorkoutLog::new(
                Uuid::new_v4().to_string(),
                exercise,
                set.weight,
                set.reps,
                date,
                estimate.one_rm,
            )
        };
        self.logs.insert(0, log.clone());

        Ok(Recorded {
            log,
            estimate,
            is_new_record,
        })
    }
}

/// Sibling of `path` used while saving.
fn temp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

/// Deserializes and validates a single log entry.
fn parse_log(entry: &Value) -> Result<WorkoutLog, String> {
    let log = WorkoutLog::deserialize(entry).map_err(|e| e.to_string())?;

    if !log.weight.is_finite() || log.weight <= 0.0 {
        return Err(format!("invalid weight value: {}", log.weight));
    }
    if log.reps == 0 {
        return Err("invalid repetitions value: 0".to_string());
    }
    if !log.calculated_one_rm.is_finite() || log.calculated_one_rm <= 0.0 {
        return Err(format!("invalid 1RM value: {}", log.calculated_one_rm));
    }
    if log.exercise.trim().is_empty() {
        return Err("missing exercise name".to_string());
    }

    Ok(log)
}
