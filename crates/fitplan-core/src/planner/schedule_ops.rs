//! Schedule and workout operations for the Planner.

use log::{debug, info};

use super::Planner;
use crate::{
    error::Result,
    models::{GeneratedSchedule, SavedSchedule, WorkoutPlan, WorkoutSlot},
    params::{GenerateSchedule, GenerateWorkout, Id},
    scheduler::{build_daily_schedule, DayInputs, WorkoutBlock},
    workout::generate_workout_plan,
};

impl Planner {
    /// Generates a day schedule and appends it to the history.
    ///
    /// When the workout slot is "morning" a workout block follows the
    /// morning routine and the full workout plan is attached to the result.
    ///
    /// # Errors
    ///
    /// * `FitplanError::ClockParse` - When any of the four times is malformed
    /// * `FitplanError::InvalidInput` - When work ends before it starts
    /// * `FitplanError::Storage` - When the history store fails
    pub fn generate_schedule(&self, params: &GenerateSchedule) -> Result<SavedSchedule> {
        let request = params.validate()?;
        let prefs = request.preferences;

        let (workout_block, workout) = match request.slot {
            WorkoutSlot::Morning => {
                let plan = generate_workout_plan(
                    prefs.goal,
                    request.workout_minutes,
                    prefs.level,
                    prefs.equipment,
                );
                let block = WorkoutBlock {
                    duration_minutes: request.workout_minutes,
                    note: prefs.summary(),
                };
                (Some(block), Some(plan))
            }
            WorkoutSlot::Unscheduled => (None, None),
        };

        let blocks = build_daily_schedule(&DayInputs {
            wake: request.wake,
            workout: workout_block,
            work_start: request.work_start,
            work_end: request.work_end,
            sleep: request.sleep,
        })?;

        let saved = self.history.append(GeneratedSchedule {
            name: request.name,
            schedule: blocks,
            workout,
        })?;
        info!(
            "Generated schedule {} for {}",
            saved.id, saved.schedule.name
        );
        Ok(saved)
    }

    /// Generates a workout without placing it in a schedule.
    ///
    /// Nothing is recorded in the history.
    pub fn generate_workout(&self, params: &GenerateWorkout) -> WorkoutPlan {
        let prefs = params.preferences();
        debug!("Generating stand-alone workout: {}", prefs.summary());
        generate_workout_plan(prefs.goal, params.duration(), prefs.level, prefs.equipment)
    }

    /// All schedules generated so far, oldest first.
    pub fn list_schedules(&self) -> Result<Vec<SavedSchedule>> {
        self.history.list()
    }

    /// Retrieves a saved schedule by its ID.
    pub fn get_schedule(&self, params: &Id) -> Result<Option<SavedSchedule>> {
        self.history.get(params.id)
    }
}
