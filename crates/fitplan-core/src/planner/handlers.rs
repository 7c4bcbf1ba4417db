//! Planner operations that return display wrapper types.

use super::Planner;
use crate::{
    display::{Exercises, SavedSchedules},
    error::{FitplanError, Result},
    models::SavedSchedule,
    params::{Id, ListExercises},
};

impl Planner {
    /// Handle listing the schedule history.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fitplan_core::PlannerBuilder;
    /// let planner = PlannerBuilder::new().build();
    /// let schedules = planner.list_schedules_summary()?;
    /// assert!(schedules.is_empty());
    /// # Result::<(), fitplan_core::FitplanError>::Ok(())
    /// ```
    pub fn list_schedules_summary(&self) -> Result<SavedSchedules> {
        Ok(SavedSchedules(self.list_schedules()?))
    }

    /// Handle showing one saved schedule.
    ///
    /// # Errors
    ///
    /// Returns `FitplanError::ScheduleNotFound` when the ID is unknown.
    pub fn show_schedule(&self, params: &Id) -> Result<SavedSchedule> {
        self.get_schedule(params)?
            .ok_or(FitplanError::ScheduleNotFound { id: params.id })
    }

    /// Handle listing catalog exercises.
    pub fn list_exercises_result(&self, params: &ListExercises) -> Result<Exercises> {
        Ok(Exercises(self.list_exercises(params)?))
    }
}
