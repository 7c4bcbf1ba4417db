//! High-level planner API for schedules, workouts and reference data.
//!
//! The [`Planner`] is the single entry point the CLI and MCP server talk to.
//! It turns raw request parameters into generated plans and records every
//! generated schedule in its [`HistoryStore`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Generators   │
//! │  (handlers)     │───▶│ (schedule_ops,  │───▶│ (scheduler,     │
//! │                 │    │  reference_ops) │    │  workout, diet) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Display wrappers       Validation, history     Pure functions
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances
//! - [`schedule_ops`]: Schedule and workout generation plus history access
//! - [`reference_ops`]: Exercise catalog lookups and diet advice
//! - [`handlers`]: Variants returning display wrappers for list output
//!
//! # Usage Examples
//!
//! ```rust
//! use fitplan_core::{params::GenerateSchedule, PlannerBuilder};
//!
//! let planner = PlannerBuilder::new().build();
//!
//! let saved = planner.generate_schedule(&GenerateSchedule {
//!     name: Some("Ada".to_string()),
//!     wake_time: "06:00".to_string(),
//!     work_start: "09:00".to_string(),
//!     work_end: "17:00".to_string(),
//!     sleep_time: "22:00".to_string(),
//!     workout_slot: Some("morning".to_string()),
//!     ..Default::default()
//! })?;
//!
//! assert_eq!(saved.id, 1);
//! assert_eq!(saved.schedule.schedule.len(), 5);
//! assert_eq!(planner.list_schedules()?.len(), 1);
//! # Ok::<(), fitplan_core::FitplanError>(())
//! ```

use std::sync::Arc;

pub mod builder;
pub mod handlers;
pub mod reference_ops;
pub mod schedule_ops;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;

use crate::history::HistoryStore;

/// Main planner interface.
///
/// Cloning is cheap; clones share the same history store.
#[derive(Clone)]
pub struct Planner {
    pub(crate) history: Arc<dyn HistoryStore>,
}

impl Planner {
    pub(crate) fn new(history: Arc<dyn HistoryStore>) -> Self {
        Self { history }
    }
}

impl std::fmt::Debug for Planner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Planner").finish_non_exhaustive()
    }
}
