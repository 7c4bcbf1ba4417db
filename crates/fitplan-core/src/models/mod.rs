//! Data models for schedules, workouts, exercises and diet advice.
//!
//! This module contains the domain types produced by the generators in
//! [`crate::scheduler`], [`crate::workout`], [`crate::catalog`] and
//! [`crate::diet`]. Display implementations live in
//! [`crate::display::models`] so the data structures stay free of
//! presentation logic.
//!
//! All models derive serde traits; serialization format is left to the
//! caller. Clock values serialize as raw minute counts, preference enums as
//! lowercase strings.
//!
//! # Examples
//!
//! ```rust
//! use fitplan_core::{
//!     clock::ClockTime,
//!     models::{GeneratedSchedule, ScheduleBlock},
//! };
//!
//! let schedule = GeneratedSchedule {
//!     name: "Sam".to_string(),
//!     schedule: vec![ScheduleBlock {
//!         start: ClockTime::from_minutes(360),
//!         end: ClockTime::from_minutes(380),
//!         title: "Morning Routine".to_string(),
//!         note: "Hydrate & get ready".to_string(),
//!     }],
//!     workout: None,
//! };
//! println!("{}", schedule); // Markdown with "6:00 AM – 6:20 AM"
//! ```

pub mod diet;
pub mod exercise;
pub mod options;
pub mod schedule;
pub mod workout;


pub use diet::DietPlan;
pub use exercise::{ExerciseCategory, ExerciseRecord};
pub use options::{Equipment, FitnessGoal, Level, WorkoutSlot};
pub use schedule::{GeneratedSchedule, SavedSchedule, ScheduleBlock};
pub use workout::{WorkoutPlan, WorkoutStep};
