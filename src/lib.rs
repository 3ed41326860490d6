//! Strength log analytics: 1RM estimation, rep-max projection and
//! personal-record tracking for logged weightlifting sets.

pub mod classifier;
pub mod domain;
pub mod error;
pub mod estimate;
pub mod exercises;
pub mod formulas;
pub mod history;
pub mod journal;
pub mod records;
pub mod selector;

pub use classifier::classify;
pub use domain::{ExerciseCategory, Set, WorkoutLog};
pub use error::{ExerciseError, FormulaError, JournalError};
pub use estimate::{
    EstimationResult, RepMax, estimate_one_rm, estimate_set, project_weight_at_reps, rep_max_table,
};
pub use formulas::Formula;
pub use records::{PersonalRecords, compute_bests, is_personal_record, percent_of_best};
pub use selector::{Selection, select};
