//! Workout step and plan definitions.

use serde::{Deserialize, Serialize};

/// One exercise entry within a workout phase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutStep {
    /// Exercise name
    pub name: String,

    /// Sets × reps, interval notation, or a fixed duration such as "3 min"
    pub plan: String,

    /// Minutes allotted to the exercise; only main-set steps carry one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
}

impl WorkoutStep {
    /// A warm-up or cool-down step whose duration lives in `plan`.
    pub fn fixed(name: impl Into<String>, plan: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            plan: plan.into(),
            estimated_minutes: None,
        }
    }

    /// A main-set step with an allotted time.
    pub fn timed(name: impl Into<String>, plan: impl Into<String>, minutes: u32) -> Self {
        Self {
            name: name.into(),
            plan: plan.into(),
            estimated_minutes: Some(minutes),
        }
    }
}

/// A complete workout: warm-up, main set and cool-down.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutPlan {
    pub warmup: Vec<WorkoutStep>,
    pub main: Vec<WorkoutStep>,
    pub cooldown: Vec<WorkoutStep>,
    /// Coaching note for the main set
    pub note: String,
}

impl WorkoutPlan {
    /// Sum of the main-set estimates.
    pub fn main_minutes(&self) -> u32 {
        self.main
            .iter()
            .filter_map(|step| step.estimated_minutes)
            .sum()
    }
}
