//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{ExerciseRecord, SavedSchedule};

/// Newtype wrapper for displaying a list of saved schedules.
///
/// Each entry is a short summary; use the `SavedSchedule` Display for the
/// full block list.
///
/// # Examples
///
/// ```rust
/// use fitplan_core::{
///     display::SavedSchedules,
///     models::{GeneratedSchedule, SavedSchedule},
/// };
/// use jiff::Timestamp;
///
/// let saved = SavedSchedule {
///     id: 1,
///     created_at: Timestamp::now(),
///     schedule: GeneratedSchedule {
///         name: "Ada".to_string(),
///         schedule: vec![],
///         workout: None,
///     },
/// };
///
/// let output = format!("{}", SavedSchedules(vec![saved]));
/// assert!(output.contains("## Schedule for Ada (ID: 1)"));
/// ```
pub struct SavedSchedules(pub Vec<SavedSchedule>);

impl SavedSchedules {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of saved schedules in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for SavedSchedules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No schedules found.");
        }

        for saved in &self.0 {
            let schedule = &saved.schedule;
            writeln!(f, "## Schedule for {} (ID: {})", schedule.name, saved.id)?;
            writeln!(f)?;
            writeln!(f, "- **Blocks**: {}", schedule.schedule.len())?;
            if let Some(workout) = schedule.block("Workout") {
                writeln!(f, "- **Workout**: {} at {}", workout.note, workout.start)?;
            }
            writeln!(f, "- **Created**: {}", LocalDateTime(&saved.created_at))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying catalog exercises as a compact list.
///
/// # Examples
///
/// ```rust
/// use fitplan_core::{catalog::find_exercise, display::Exercises};
///
/// let exercises = Exercises(find_exercise("plank").into_iter().collect());
/// let output = format!("{}", exercises);
/// assert!(output.starts_with("- **Plank** (core)"));
/// ```
pub struct Exercises(pub Vec<&'static ExerciseRecord>);

impl Exercises {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of exercises in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Exercises {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No exercises found.");
        }

        for exercise in &self.0 {
            writeln!(
                f,
                "- **{}** ({}): {}",
                exercise.name, exercise.category, exercise.default_plan
            )?;
        }
        Ok(())
    }
}
