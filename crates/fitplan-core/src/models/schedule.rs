//! Schedule block and generated schedule definitions.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::WorkoutPlan;
use crate::clock::{ClockTime, MINUTES_PER_DAY};

/// A labeled time interval within a day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleBlock {
    /// Start of the block, serialized as "h:mm AM/PM"
    pub start: ClockTime,

    /// End of the block; the next morning when the block crosses midnight
    pub end: ClockTime,

    /// Short label, e.g. "Work"
    pub title: String,

    /// Free-text note shown next to the block
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
}

impl ScheduleBlock {
    /// Length of the block in minutes, counting across midnight.
    pub fn duration_minutes(&self) -> i32 {
        self.start
            .minutes_until(self.end)
            .rem_euclid(MINUTES_PER_DAY)
    }
}

/// A full day plan as produced for one request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedSchedule {
    /// Who the schedule is for
    pub name: String,

    /// Blocks in emission order
    pub schedule: Vec<ScheduleBlock>,

    /// Workout detail when a workout block was placed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout: Option<WorkoutPlan>,
}

impl GeneratedSchedule {
    /// Looks up the first block with the given title.
    pub fn block(&self, title: &str) -> Option<&ScheduleBlock> {
        self.schedule.iter().find(|block| block.title == title)
    }
}

/// A generated schedule as kept in the history store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedSchedule {
    /// Store-assigned identifier, starting at 1
    pub id: u64,

    /// When the schedule was appended (UTC)
    pub created_at: Timestamp,

    #[serde(flatten)]
    pub schedule: GeneratedSchedule,
}
