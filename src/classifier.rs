//! Exercise name classification.
//!
//! Maps a free-text exercise name to an [`ExerciseCategory`] by pattern
//! matching. This is a heuristic: names that match nothing are treated as
//! compound lifts.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::ExerciseCategory;

/// Pattern sets in match order; the first category with a hit wins.
static PATTERNS: LazyLock<Vec<(ExerciseCategory, Regex)>> = LazyLock::new(|| {
    [
        (
            ExerciseCategory::Machine,
            r"leg press|hack squat|smith|chest press",
        ),
        (
            ExerciseCategory::Dumbbell,
            r"\bdb\b|dumbbell|db bench|db incline|incline dumbbell|goblet squat|lunges?",
        ),
        (
            ExerciseCategory::Compound,
            r"squat|bench|deadlift|overhead press|\bohp\b|barbell row|\brow\b",
        ),
    ]
    .into_iter()
    .filter_map(|(category, pattern)| Regex::new(pattern).ok().map(|re| (category, re)))
    .collect()
});

/// Lowercases, drops everything outside `[a-z0-9 ]`, collapses runs of spaces.
pub fn normalize_name(name: &str) -> String {
    let kept: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .collect();

    kept.split(' ')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Classifies an exercise name. Always succeeds.
pub fn classify(name: &str) -> ExerciseCategory {
    let normalized = normalize_name(name);

    PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(&normalized))
        .map(|(category, _)| *category)
        .unwrap_or(ExerciseCategory::Compound)
}
