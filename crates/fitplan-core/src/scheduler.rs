//! Time-block scheduling for a single day.
//!
//! [`build_daily_schedule`] always emits blocks in the same order:
//!
//! ```text
//! Morning Routine (20) → [Workout (n)] → Work (end - start) → Evening Routine (60) → Sleep (480)
//! ```
//!
//! Anchor times come from the caller and are trusted: blocks are not sorted
//! and overlaps are not detected. The one check performed is that work does
//! not end before it starts.

use log::debug;

use crate::{
    clock::ClockTime,
    error::{FitplanError, Result},
    models::ScheduleBlock,
};

/// Length of the morning routine block.
pub const MORNING_ROUTINE_MINUTES: u32 = 20;
/// Length of the evening routine block.
pub const EVENING_ROUTINE_MINUTES: u32 = 60;
/// Length of the sleep block.
pub const SLEEP_MINUTES: u32 = 480;

/// Builds a labeled block of `duration_minutes` starting at `start`.
///
/// Both endpoints are folded into one day, so a block crossing midnight ends
/// at the next morning's time of day.
pub fn make_block(
    start: ClockTime,
    duration_minutes: u32,
    title: impl Into<String>,
    note: impl Into<String>,
) -> ScheduleBlock {
    let duration = i32::try_from(duration_minutes).unwrap_or(i32::MAX);
    ScheduleBlock {
        start: start.wrapped(),
        end: start.add_minutes(duration).wrapped(),
        title: title.into(),
        note: note.into(),
    }
}

/// Workout block request placed right after the morning routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutBlock {
    pub duration_minutes: u32,
    pub note: String,
}

/// Anchor times for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayInputs {
    pub wake: ClockTime,
    pub workout: Option<WorkoutBlock>,
    pub work_start: ClockTime,
    pub work_end: ClockTime,
    pub sleep: ClockTime,
}

/// Produces the ordered blocks for a day.
///
/// # Errors
///
/// Returns [`FitplanError::InvalidInput`] on field `work_end` when work ends
/// before it starts.
pub fn build_daily_schedule(inputs: &DayInputs) -> Result<Vec<ScheduleBlock>> {
    let work_minutes = u32::try_from(inputs.work_start.minutes_until(inputs.work_end))
        .map_err(|_| {
            FitplanError::invalid_input("work_end").with_reason(format!(
                "work ends at {} before it starts at {}",
                inputs.work_end, inputs.work_start
            ))
        })?;

    let mut blocks = Vec::with_capacity(5);
    blocks.push(make_block(
        inputs.wake,
        MORNING_ROUTINE_MINUTES,
        "Morning Routine",
        "Hydrate & get ready",
    ));

    if let Some(workout) = &inputs.workout {
        blocks.push(make_block(
            inputs.wake.add_minutes(MORNING_ROUTINE_MINUTES as i32),
            workout.duration_minutes,
            "Workout",
            workout.note.clone(),
        ));
    }

    blocks.push(make_block(
        inputs.work_start,
        work_minutes,
        "Work",
        "Focus time",
    ));
    blocks.push(make_block(
        inputs.work_end,
        EVENING_ROUTINE_MINUTES,
        "Evening Routine",
        "Relax & family time",
    ));
    blocks.push(make_block(inputs.sleep, SLEEP_MINUTES, "Sleep", "Recovery"));

    debug!("Built daily schedule with {} blocks", blocks.len());
    Ok(blocks)
}
