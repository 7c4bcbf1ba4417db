//! Exercise catalog record definitions.

use std::str::FromStr;

use serde::Serialize;

/// Catalog grouping of an exercise.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Strength,
    Core,
    Cardio,
    Yoga,
}

impl FromStr for ExerciseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strength" => Ok(ExerciseCategory::Strength),
            "core" => Ok(ExerciseCategory::Core),
            "cardio" => Ok(ExerciseCategory::Cardio),
            "yoga" => Ok(ExerciseCategory::Yoga),
            _ => Err(format!("Invalid exercise category: {s}")),
        }
    }
}

impl ExerciseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseCategory::Strength => "strength",
            ExerciseCategory::Core => "core",
            ExerciseCategory::Cardio => "cardio",
            ExerciseCategory::Yoga => "yoga",
        }
    }
}

/// A read-only entry of the static exercise catalog.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ExerciseRecord {
    /// Display name, unique within the catalog
    pub name: &'static str,

    /// Relative path of the illustration
    pub image_reference: &'static str,

    /// What the exercise is good for
    pub usage_description: &'static str,

    /// Suggested volume, e.g. "3 sets × 12 reps"
    pub default_plan: &'static str,

    pub category: ExerciseCategory,
}
