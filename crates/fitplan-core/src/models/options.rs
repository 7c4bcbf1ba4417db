//! Preference enumerations for workout and schedule generation.
//!
//! Every enumeration here is built from free-form user text. Unknown text is
//! never an error: each type names its fallback variant with `#[default]` and
//! `from_input` maps anything unrecognized onto it.

use serde::{Deserialize, Serialize};

/// What the user wants their training to achieve.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FitnessGoal {
    /// Fat loss, circuit-style sessions
    Lose,
    /// Muscle gain, full strength sessions
    Gain,
    /// Maintenance, balanced sessions
    #[default]
    Maintain,
}

impl FitnessGoal {
    /// Interprets user text, falling back to [`FitnessGoal::Maintain`].
    pub fn from_input(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "lose" => FitnessGoal::Lose,
            "gain" => FitnessGoal::Gain,
            _ => FitnessGoal::Maintain,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::Lose => "lose",
            FitnessGoal::Gain => "gain",
            FitnessGoal::Maintain => "maintain",
        }
    }
}

/// Training experience, which scales set and rep counts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Level {
    /// Interprets user text, falling back to [`Level::Intermediate`].
    pub fn from_input(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "beginner" => Level::Beginner,
            "intermediate" => Level::Intermediate,
            "advanced" => Level::Advanced,
            _ => Level::Intermediate,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }

    /// Working sets per exercise.
    pub fn sets(&self) -> u32 {
        match self {
            Level::Beginner => 2,
            Level::Intermediate => 3,
            Level::Advanced => 4,
        }
    }

    /// Reps per set for rep-counted exercises.
    pub fn reps(&self) -> u32 {
        match self {
            Level::Beginner => 10,
            Level::Intermediate => 12,
            Level::Advanced => 15,
        }
    }
}

/// Equipment available for the main set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Equipment {
    /// Full gym with barbells
    Gym,
    /// A pair of dumbbells
    Dumbbells,
    /// Nothing but the floor
    #[default]
    Bodyweight,
}

impl Equipment {
    /// Interprets user text, falling back to [`Equipment::Bodyweight`].
    pub fn from_input(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "gym" => Equipment::Gym,
            "dumbbells" => Equipment::Dumbbells,
            _ => Equipment::Bodyweight,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Equipment::Gym => "gym",
            Equipment::Dumbbells => "dumbbells",
            Equipment::Bodyweight => "bodyweight",
        }
    }
}

/// Where in the day a workout goes.
///
/// Only the morning slot places a block; any other request leaves the day
/// without a workout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutSlot {
    /// Right after the morning routine
    Morning,
    /// No workout today
    #[default]
    #[serde(rename = "none")]
    Unscheduled,
}

impl WorkoutSlot {
    /// Interprets user text, falling back to [`WorkoutSlot::Unscheduled`].
    pub fn from_input(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "morning" => WorkoutSlot::Morning,
            _ => WorkoutSlot::Unscheduled,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutSlot::Morning => "morning",
            WorkoutSlot::Unscheduled => "none",
        }
    }
}
