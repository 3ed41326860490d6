//! Domain types for logged training sets.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FormulaError;

/// Coarse movement-pattern classification used to pick a strength curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Compound,
    Dumbbell,
    Machine,
}

impl ExerciseCategory {
    /// Returns all category variants.
    pub fn all() -> &'static [ExerciseCategory] {
        &[
            ExerciseCategory::Compound,
            ExerciseCategory::Dumbbell,
            ExerciseCategory::Machine,
        ]
    }

    /// Returns the display name for the category.
    pub fn display_name(&self) -> &'static str {
        match self {
            ExerciseCategory::Compound => "Compound",
            ExerciseCategory::Dumbbell => "Dumbbell",
            ExerciseCategory::Machine => "Machine",
        }
    }
}

impl FromStr for ExerciseCategory {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compound" => Ok(ExerciseCategory::Compound),
            "dumbbell" | "db" => Ok(ExerciseCategory::Dumbbell),
            "machine" => Ok(ExerciseCategory::Machine),
            _ => Err(FormulaError::InvalidArgument(format!(
                "unknown exercise category: {}",
                s
            ))),
        }
    }
}

impl std::fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A performed set, as supplied to the estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Set {
    pub weight: f64,
    pub reps: u32,
    pub category: Option<ExerciseCategory>,
}

impl Set {
    /// Creates a new set without a category.
    pub fn new(weight: f64, reps: u32) -> Self {
        Self {
            weight,
            reps,
            category: None,
        }
    }

    /// Returns the set with its category set.
    pub fn with_category(mut self, category: ExerciseCategory) -> Self {
        self.category = Some(category);
        self
    }
}

/// A set as stored in the journal.
///
/// `calculated_one_rm` is computed once when the set is recorded and kept
/// verbatim; personal-record detection compares against this stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    pub id: String,
    pub exercise: String,
    pub weight: f64,
    pub reps: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    pub date: DateTime<Utc>,
    #[serde(rename = "calculatedOneRM")]
    pub calculated_one_rm: f64,
}

impl WorkoutLog {
    /// Creates a new log entry.
    pub fn new(
        id: impl Into<String>,
        exercise: impl Into<String>,
        weight: f64,
        reps: u32,
        date: DateTime<Utc>,
        calculated_one_rm: f64,
    ) -> Self {
        Self {
            id: id.into(),
            exercise: exercise.into(),
            weight,
            reps,
            sets: None,
            date,
            calculated_one_rm,
        }
    }
}
