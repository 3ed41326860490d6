//! The user's list of exercise names.

use serde::{Deserialize, Serialize};

use crate::error::ExerciseError;

/// Exercises a new journal starts with.
pub const DEFAULT_EXERCISES: [&str; 5] = [
    "Squat",
    "Bench Press",
    "Deadlift",
    "Overhead Press",
    "Barbell Row",
];

/// Sorted, duplicate-free list of exercise names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ExerciseList {
    names: Vec<String>,
}

impl Default for ExerciseList {
    fn default() -> Self {
        Self::from_names(DEFAULT_EXERCISES)
    }
}

impl From<Vec<String>> for ExerciseList {
    fn from(names: Vec<String>) -> Self {
        Self::from_names(names)
    }
}

impl From<ExerciseList> for Vec<String> {
    fn from(list: ExerciseList) -> Self {
        list.names
    }
}

impl ExerciseList {
    /// Builds a list from arbitrary names, trimming, dropping blanks and duplicates.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self { names: Vec::new() };
        for name in names {
            // blanks and repeats are dropped silently here
            let _ = list.add(name.as_ref());
        }
        list
    }

    /// Adds an exercise, keeping the list sorted.
    ///
    /// Returns the trimmed name that was stored.
    pub fn add(&mut self, name: &str) -> Result<&str, ExerciseError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ExerciseError::EmptyName);
        }

        match self.names.binary_search_by(|n| n.as_str().cmp(name)) {
            Ok(_) => Err(ExerciseError::Duplicate(name.to_string())),
            Err(pos) => {
                self.names.insert(pos, name.to_string());
                Ok(&self.names[pos])
            }
        }
    }

    /// Removes an exercise by exact name. Returns false if it wasn't present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
