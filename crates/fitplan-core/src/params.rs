//! Parameter structures for fitplan operations
//!
//! This module contains the request structures shared by every interface
//! (CLI, MCP). They carry raw user input: clock values as "HH:MM" text and
//! preferences as free-form strings. Interpretation happens in one place,
//! the `validate`/accessor methods below, so both interfaces agree on
//! defaults and error messages.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers add their framework derives on wrapper types and convert
//! into these structures with `From`. JSON schemas for the MCP layer are
//! derived only when the `schema` feature is enabled.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    clock::{parse_clock_time, ClockTime},
    error::{FitplanError, Result},
    models::{Equipment, ExerciseCategory, FitnessGoal, Level, WorkoutSlot},
};

/// Name used when a schedule request does not give one.
pub const DEFAULT_SCHEDULE_NAME: &str = "Person";
/// Workout length used when a request does not give one.
pub const DEFAULT_WORKOUT_MINUTES: u32 = 30;

/// Generic parameters for operations requiring just an ID.
///
/// Used for show_schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the saved schedule
    pub id: u64,
}

/// Parameters for generating a daily schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GenerateSchedule {
    /// Who the schedule is for (defaults to "Person")
    #[serde(default)]
    pub name: Option<String>,
    /// Wake-up time as "HH:MM"
    pub wake_time: String,
    /// Start of work as "HH:MM"
    pub work_start: String,
    /// End of work as "HH:MM"; must not be before work_start
    pub work_end: String,
    /// Bedtime as "HH:MM"
    pub sleep_time: String,
    /// "morning" places a workout after the morning routine; anything else skips it
    #[serde(default)]
    pub workout_slot: Option<String>,
    /// Workout length in minutes (defaults to 30)
    #[serde(default)]
    pub workout_duration: Option<u32>,
    /// "lose", "gain", or anything else for maintenance
    #[serde(default)]
    pub goal: Option<String>,
    /// "beginner", "intermediate" or "advanced" (defaults to intermediate)
    #[serde(default)]
    pub level: Option<String>,
    /// "gym", "dumbbells", or anything else for bodyweight
    #[serde(default)]
    pub equipment: Option<String>,
}

/// Parameters for generating a stand-alone workout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GenerateWorkout {
    /// "lose", "gain", or anything else for maintenance
    #[serde(default)]
    pub goal: Option<String>,
    /// Total workout length in minutes (defaults to 30)
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// "beginner", "intermediate" or "advanced" (defaults to intermediate)
    #[serde(default)]
    pub level: Option<String>,
    /// "gym", "dumbbells", or anything else for bodyweight
    #[serde(default)]
    pub equipment: Option<String>,
}

impl GenerateWorkout {
    /// Interpreted preferences with fallbacks applied.
    pub fn preferences(&self) -> WorkoutPreferences {
        WorkoutPreferences::from_inputs(
            self.goal.as_deref(),
            self.level.as_deref(),
            self.equipment.as_deref(),
        )
    }

    /// Requested duration or the default.
    pub fn duration(&self) -> u32 {
        self.duration_minutes.unwrap_or(DEFAULT_WORKOUT_MINUTES)
    }
}

/// Parameters for listing catalog exercises.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListExercises {
    /// Case-insensitive substring of the exercise name
    #[serde(default)]
    pub search: Option<String>,
    /// One of "strength", "core", "cardio", "yoga"
    #[serde(default)]
    pub category: Option<String>,
}

impl ListExercises {
    /// Parsed category filter.
    ///
    /// # Errors
    ///
    /// `FitplanError::InvalidInput` when the category is not one of the
    /// catalog's groups.
    pub fn category(&self) -> Result<Option<ExerciseCategory>> {
        self.category
            .as_deref()
            .map(|raw| {
                raw.parse::<ExerciseCategory>().map_err(|reason| {
                    FitplanError::invalid_input("category").with_reason(format!(
                        "{reason}. Must be 'strength', 'core', 'cardio' or 'yoga'"
                    ))
                })
            })
            .transpose()
    }
}

/// Parameters for looking up one exercise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ExerciseName {
    /// Exact exercise name, case-insensitive
    pub name: String,
}

/// Parameters for a diet recommendation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RecommendDiet {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimetres
    pub height_cm: f64,
    /// Age in years
    pub age: u32,
    /// "lose", "gain", or anything else for maintenance
    #[serde(default)]
    pub goal: Option<String>,
}

impl RecommendDiet {
    pub fn goal(&self) -> FitnessGoal {
        FitnessGoal::from_input(self.goal.as_deref().unwrap_or_default())
    }
}

/// Goal, level and equipment after fallbacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkoutPreferences {
    pub goal: FitnessGoal,
    pub level: Level,
    pub equipment: Equipment,
}

impl WorkoutPreferences {
    /// Interprets optional user text; missing values take the defaults.
    pub fn from_inputs(goal: Option<&str>, level: Option<&str>, equipment: Option<&str>) -> Self {
        Self {
            goal: goal.map(FitnessGoal::from_input).unwrap_or_default(),
            level: level.map(Level::from_input).unwrap_or_default(),
            equipment: equipment.map(Equipment::from_input).unwrap_or_default(),
        }
    }

    /// "goal/level/equipment", used as the workout block note.
    pub fn summary(&self) -> String {
        format!(
            "{}/{}/{}",
            self.goal.as_str(),
            self.level.as_str(),
            self.equipment.as_str()
        )
    }
}

/// A schedule request with every field parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSchedule {
    pub name: String,
    pub wake: ClockTime,
    pub work_start: ClockTime,
    pub work_end: ClockTime,
    pub sleep: ClockTime,
    pub slot: WorkoutSlot,
    pub workout_minutes: u32,
    pub preferences: WorkoutPreferences,
}

fn parse_field(field: &str, raw: &str) -> Result<ClockTime> {
    parse_clock_time(raw).map_err(|e| match e {
        FitplanError::ClockParse { input, reason } => FitplanError::ClockParse {
            input,
            reason: format!("{field}: {reason}"),
        },
        other => other,
    })
}

impl GenerateSchedule {
    /// Parse the clock fields and resolve defaults.
    ///
    /// Preference strings never fail; unknown values fall back. Work hours
    /// are checked later by the scheduler.
    ///
    /// # Errors
    ///
    /// * `FitplanError::ClockParse` - When any time is not "HH:MM"
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fitplan_core::params::GenerateSchedule;
    ///
    /// let params = GenerateSchedule {
    ///     wake_time: "06:00".to_string(),
    ///     work_start: "09:00".to_string(),
    ///     work_end: "17:00".to_string(),
    ///     sleep_time: "22:00".to_string(),
    ///     ..Default::default()
    /// };
    /// let parsed = params.validate()?;
    /// assert_eq!(parsed.name, "Person");
    /// assert_eq!(parsed.wake.minutes(), 360);
    /// # Ok::<(), fitplan_core::FitplanError>(())
    /// ```
    pub fn validate(&self) -> Result<ValidatedSchedule> {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_SCHEDULE_NAME)
            .to_string();

        Ok(ValidatedSchedule {
            name,
            wake: parse_field("wake_time", &self.wake_time)?,
            work_start: parse_field("work_start", &self.work_start)?,
            work_end: parse_field("work_end", &self.work_end)?,
            sleep: parse_field("sleep_time", &self.sleep_time)?,
            slot: self
                .workout_slot
                .as_deref()
                .map(WorkoutSlot::from_input)
                .unwrap_or_default(),
            workout_minutes: self.workout_duration.unwrap_or(DEFAULT_WORKOUT_MINUTES),
            preferences: WorkoutPreferences::from_inputs(
                self.goal.as_deref(),
                self.level.as_deref(),
                self.equipment.as_deref(),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn office_day() -> GenerateSchedule {
        GenerateSchedule {
            wake_time: "06:00".to_string(),
            work_start: "09:00".to_string(),
            work_end: "17:00".to_string(),
            sleep_time: "22:00".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_defaults() {
        let parsed = office_day().validate().unwrap();
        assert_eq!(parsed.name, DEFAULT_SCHEDULE_NAME);
        assert_eq!(parsed.slot, WorkoutSlot::Unscheduled);
        assert_eq!(parsed.workout_minutes, 30);
        assert_eq!(parsed.preferences, WorkoutPreferences::default());
        assert_eq!(parsed.work_end.minutes(), 17 * 60);
    }

    #[test]
    fn test_validate_blank_name_uses_default() {
        let mut params = office_day();
        params.name = Some("   ".to_string());
        assert_eq!(params.validate().unwrap().name, "Person");

        params.name = Some("Ada".to_string());
        assert_eq!(params.validate().unwrap().name, "Ada");
    }

    #[test]
    fn test_validate_reports_field_on_bad_time() {
        let mut params = office_day();
        params.sleep_time = "late".to_string();

        match params.validate().unwrap_err() {
            FitplanError::ClockParse { input, reason } => {
                assert_eq!(input, "late");
                assert!(reason.starts_with("sleep_time:"));
            }
            other => panic!("Expected ClockParse error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_preferences_fall_back() {
        let mut params = office_day();
        params.workout_slot = Some("morning".to_string());
        params.workout_duration = Some(45);
        params.goal = Some("gain".to_string());
        params.level = Some("expert".to_string());
        params.equipment = Some("bands".to_string());

        let parsed = params.validate().unwrap();
        assert_eq!(parsed.slot, WorkoutSlot::Morning);
        assert_eq!(parsed.workout_minutes, 45);
        assert_eq!(parsed.preferences.summary(), "gain/intermediate/bodyweight");
    }

    #[test]
    fn test_list_exercises_category() {
        let params = ListExercises {
            category: Some("Cardio".to_string()),
            ..Default::default()
        };
        assert_eq!(params.category().unwrap(), Some(ExerciseCategory::Cardio));

        assert_eq!(ListExercises::default().category().unwrap(), None);

        let bad = ListExercises {
            category: Some("pilates".to_string()),
            ..Default::default()
        };
        match bad.category().unwrap_err() {
            FitplanError::InvalidInput { field, reason } => {
                assert_eq!(field, "category");
                assert!(reason.contains("Invalid exercise category: pilates"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_generate_workout_defaults() {
        let params = GenerateWorkout::default();
        assert_eq!(params.duration(), DEFAULT_WORKOUT_MINUTES);
        assert_eq!(params.preferences().summary(), "maintain/intermediate/bodyweight");
    }

    #[test]
    fn test_schedule_params_deserialize_with_defaults() {
        let params: GenerateSchedule = serde_json::from_str(
            r#"{"wake_time":"06:00","work_start":"09:00","work_end":"17:00","sleep_time":"22:00"}"#,
        )
        .unwrap();
        assert!(params.name.is_none());
        assert!(params.workout_duration.is_none());
    }
}
