//! 1RM estimation and rep-max projection.
//!
//! Combines the selector and the formula library into the two entry points
//! used by callers: estimating a 1RM from a performed set, and projecting the
//! weight for other rep counts from a known 1RM.

use serde::Serialize;

use crate::domain::{ExerciseCategory, Set};
use crate::error::FormulaError;
use crate::formulas::Formula;
use crate::selector::select;

/// Default projection targets for rep-only estimates.
pub const REP_ONLY_TARGETS: [u32; 6] = [2, 4, 6, 8, 10, 15];

/// Default projection targets for category-aware estimates.
pub const CATEGORY_TARGETS: [u32; 5] = [5, 10, 15, 20, 25];

/// Estimated 1RM with the formulas that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimationResult {
    pub one_rm: f64,
    pub one_rm_formula: Formula,
    pub rep_max_formula: Formula,
    /// Rep count used after the selector's ceiling.
    pub capped_reps: u32,
    pub label: &'static str,
    /// How the 1RM was obtained, e.g. "Treat as 1RM" for low-rep sets.
    pub description: &'static str,
    pub category: Option<ExerciseCategory>,
}

impl EstimationResult {
    /// Projection targets matching the policy this estimate came from.
    pub fn default_targets(&self) -> &'static [u32] {
        match self.category {
            Some(_) => &CATEGORY_TARGETS,
            None => &REP_ONLY_TARGETS,
        }
    }
}

/// A single row of a rep-max table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RepMax {
    pub reps: u32,
    pub weight: f64,
}

/// Estimates 1RM from weight and reps.
///
/// # Arguments
/// * `weight` - Weight lifted
/// * `reps` - Number of repetitions performed
/// * `category` - Exercise category; `None` selects the rep-only policy
///
/// # Errors
/// `InvalidArgument` for non-positive weight or zero reps.
pub fn estimate_one_rm(
    weight: f64,
    reps: u32,
    category: Option<ExerciseCategory>,
) -> Result<EstimationResult, FormulaError> {
    if reps == 0 {
        return Err(FormulaError::bad_reps(reps));
    }

    let selection = select(reps, category);
    let one_rm = selection
        .one_rm_formula
        .one_rm(weight, selection.capped_reps)?;

    Ok(EstimationResult {
        one_rm,
        one_rm_formula: selection.one_rm_formula,
        rep_max_formula: selection.rep_max_formula,
        capped_reps: selection.capped_reps,
        label: selection.one_rm_formula.display_name(),
        description: selection.description(),
        category,
    })
}

/// Estimates 1RM for a [`Set`].
pub fn estimate_set(set: &Set) -> Result<EstimationResult, FormulaError> {
    estimate_one_rm(set.weight, set.reps, set.category)
}

/// Projects the weight liftable for `target_reps` given a 1RM.
///
/// A single rep always returns the 1RM unchanged.
pub fn project_weight_at_reps(
    one_rm: f64,
    target_reps: u32,
    rep_max_formula: Formula,
) -> Result<f64, FormulaError> {
    rep_max_formula.weight_at(one_rm, target_reps)
}

/// Projects a rep-max table from an estimate.
///
/// The estimate's `rep_max_formula` is used for every row so the curve stays
/// consistent; the formula is never re-selected per target.
pub fn rep_max_table(
    estimate: &EstimationResult,
    targets: &[u32],
) -> Result<Vec<RepMax>, FormulaError> {
    targets
        .iter()
        .map(|&reps| {
            project_weight_at_reps(estimate.one_rm, reps, estimate.rep_max_formula)
                .map(|weight| RepMax { reps, weight })
        })
        .collect()
}
