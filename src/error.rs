//! Error types for the liftlog library.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in formula calculations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    /// Input outside what any formula accepts (non-positive weight, zero reps).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A formula evaluated outside the rep range where it stays finite and positive.
    #[error("{formula} is undefined at {reps} repetitions")]
    DomainError { formula: &'static str, reps: u32 },
}

impl FormulaError {
    pub(crate) fn bad_weight(weight: f64) -> Self {
        FormulaError::InvalidArgument(format!("weight must be positive: {}", weight))
    }

    pub(crate) fn bad_reps(reps: u32) -> Self {
        FormulaError::InvalidArgument(format!("repetitions must be positive: {}", reps))
    }
}

/// Errors from editing the exercise list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExerciseError {
    #[error("exercise name is empty")]
    EmptyName,

    #[error("exercise already exists: {0}")]
    Duplicate(String),
}

/// Errors that can occur when reading or writing the journal file.
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("cannot read {}: {source}", path.display())]
    CannotRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    CannotWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid journal format in {}: {reason}", path.display())]
    InvalidFormat { path: PathBuf, reason: String },

    #[error("exercise is not in the exercise list: {0}")]
    UnknownExercise(String),

    #[error("cannot serialize journal: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Formula(#[from] FormulaError),
}
