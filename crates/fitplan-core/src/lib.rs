//! Core library for the fitplan daily planner.
//!
//! This crate turns a handful of anchor times and fitness preferences into a
//! time-blocked day, a structured workout, and BMI-based diet advice. It also
//! ships a static exercise catalog and keeps an append-only history of
//! generated schedules.
//!
//! # Layers
//!
//! - **Generators** ([`scheduler`], [`workout`], [`diet`], [`catalog`]): pure
//!   functions over [`models`]
//! - **Planner** ([`planner`]): validates [`params`], calls the generators and
//!   records schedules in a [`history::HistoryStore`]
//! - **Display** ([`display`]): markdown formatting shared by the CLI and the
//!   MCP server
//!
//! # Quick Start
//!
//! ```rust
//! use fitplan_core::{params::GenerateSchedule, PlannerBuilder};
//!
//! let planner = PlannerBuilder::new().build();
//!
//! let saved = planner.generate_schedule(&GenerateSchedule {
//!     wake_time: "06:00".to_string(),
//!     work_start: "09:00".to_string(),
//!     work_end: "17:00".to_string(),
//!     sleep_time: "22:00".to_string(),
//!     ..Default::default()
//! })?;
//! println!("{}", saved);
//!
//! let work = saved.schedule.block("Work").expect("work block");
//! assert_eq!(work.start.to_string(), "9:00 AM");
//! assert_eq!(work.end.to_string(), "5:00 PM");
//! # Ok::<(), fitplan_core::FitplanError>(())
//! ```

pub mod catalog;
pub mod clock;
pub mod diet;
pub mod display;
pub mod error;
pub mod history;
pub mod models;
pub mod params;
pub mod planner;
pub mod scheduler;
pub mod workout;

// Re-export commonly used types
pub use clock::{format_clock_time, parse_clock_label, parse_clock_time, ClockTime};
pub use display::{ClockRange, Exercises, LocalDateTime, OperationStatus, SavedSchedules};
pub use error::{FitplanError, Result};
pub use history::{HistoryStore, InMemoryHistory};
pub use models::{
    DietPlan, Equipment, ExerciseCategory, ExerciseRecord, FitnessGoal, GeneratedSchedule, Level,
    SavedSchedule, ScheduleBlock, WorkoutPlan, WorkoutSlot, WorkoutStep,
};
pub use params::{
    ExerciseName, GenerateSchedule, GenerateWorkout, Id, ListExercises, RecommendDiet,
};
pub use planner::{Planner, PlannerBuilder};
