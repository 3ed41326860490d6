//! Formula selection from rep count and exercise category.
//!
//! Two policies exist. When the exercise category is known, the
//! category-aware policy picks a curve per movement pattern. Without a
//! category, the rep-only policy buckets by rep range.

use crate::domain::ExerciseCategory;
use crate::formulas::Formula;

/// Rep ceiling applied before rep-only bucketing.
pub const REP_ONLY_MAX_REPS: u32 = 20;

/// Rep ceiling applied before category-aware selection.
pub const CATEGORY_MAX_REPS: u32 = 25;

/// Up to this many reps the category-aware policy takes the weight as the 1RM.
pub const TREAT_AS_MAX_REPS: u32 = 3;

/// Which formulas to use for a given set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Formula used to estimate the 1RM from the set.
    pub one_rm_formula: Formula,
    /// Formula used to project weights at other rep counts.
    pub rep_max_formula: Formula,
    /// Rep count after the policy's ceiling.
    pub capped_reps: u32,
    /// Category the selection was made for, if any.
    pub category: Option<ExerciseCategory>,
}

impl Selection {
    fn same(formula: Formula, capped_reps: u32, category: Option<ExerciseCategory>) -> Self {
        Self {
            one_rm_formula: formula,
            rep_max_formula: formula,
            capped_reps,
            category,
        }
    }

    fn treat_as_max(capped_reps: u32, category: Option<ExerciseCategory>) -> Self {
        Self {
            one_rm_formula: Formula::None,
            rep_max_formula: Formula::Epley,
            capped_reps,
            category,
        }
    }

    /// Human-readable description of how the 1RM is obtained.
    pub fn description(&self) -> &'static str {
        match self.one_rm_formula {
            Formula::None => "Treat as 1RM",
            other => other.display_name(),
        }
    }
}

/// Selects formulas using the category-aware policy when a category is given,
/// and the rep-only policy otherwise.
pub fn select(reps: u32, category: Option<ExerciseCategory>) -> Selection {
    match category {
        Some(category) => select_for_category(reps, category),
        None => select_by_reps(reps),
    }
}

/// Rep-only policy: reps capped to 20, then bucketed.
pub fn select_by_reps(reps: u32) -> Selection {
    let capped = reps.min(REP_ONLY_MAX_REPS);

    if capped <= 1 {
        return Selection::treat_as_max(capped, None);
    }

    let formula = match capped {
        ..=5 => Formula::Epley,
        6..=10 => Formula::Brzycki,
        11..=15 => Formula::Lombardi,
        _ => Formula::Mayhew,
    };

    Selection::same(formula, capped, None)
}

/// Category-aware policy: reps capped to 25; 3 reps or fewer is taken as a max.
pub fn select_for_category(reps: u32, category: ExerciseCategory) -> Selection {
    let capped = reps.min(CATEGORY_MAX_REPS);

    if capped <= TREAT_AS_MAX_REPS {
        return Selection::treat_as_max(capped, Some(category));
    }

    let formula = match category {
        ExerciseCategory::Compound => match capped {
            ..=10 => Formula::Epley,
            11..=20 => Formula::Mayhew,
            _ => Formula::Brzycki,
        },
        ExerciseCategory::Dumbbell => match capped {
            ..=8 => Formula::Epley,
            9..=20 => Formula::Mayhew,
            _ => Formula::Brzycki,
        },
        ExerciseCategory::Machine => match capped {
            ..=10 => Formula::Brzycki,
            11..=15 => Formula::Mayhew,
            _ => Formula::Brzycki,
        },
    };

    Selection::same(formula, capped, Some(category))
}
