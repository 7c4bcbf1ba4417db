//! Exercise catalog and diet operations for the Planner.

use super::Planner;
use crate::{
    catalog::{find_exercise, list_exercises},
    diet::recommend_diet,
    error::{FitplanError, Result},
    models::{DietPlan, ExerciseRecord},
    params::{ExerciseName, ListExercises, RecommendDiet},
};

impl Planner {
    /// Catalog entries matching the optional search text and category.
    ///
    /// # Errors
    ///
    /// Returns `FitplanError::InvalidInput` for an unknown category.
    pub fn list_exercises(&self, params: &ListExercises) -> Result<Vec<&'static ExerciseRecord>> {
        let category = params.category()?;
        let search = params
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        Ok(list_exercises(search, category))
    }

    /// Looks up a single exercise by name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `FitplanError::ExerciseNotFound` when no entry matches.
    pub fn show_exercise(&self, params: &ExerciseName) -> Result<&'static ExerciseRecord> {
        find_exercise(&params.name).ok_or_else(|| FitplanError::ExerciseNotFound {
            name: params.name.trim().to_string(),
        })
    }

    /// BMI and diet advice for the given measurements and goal.
    ///
    /// # Errors
    ///
    /// Returns `FitplanError::InvalidInput` for non-positive measurements.
    pub fn recommend_diet(&self, params: &RecommendDiet) -> Result<DietPlan> {
        recommend_diet(params.weight_kg, params.height_cm, params.age, params.goal())
    }
}
