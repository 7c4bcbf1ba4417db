//! Display formatting and wrapper types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds wrapper types for collections, time values and status
//! lines, so every interface formats the same data the same way.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │ (SavedSchedule, │───▶│ (SavedSchedules,│───▶│    Output       │
//! │  WorkoutPlan)   │    │  ClockRange)    │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! All output is markdown.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (SavedSchedules, Exercises)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Timestamp and clock range formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use fitplan_core::{
//!     clock::ClockTime,
//!     display::{ClockRange, OperationStatus},
//! };
//!
//! let range = ClockRange(ClockTime::from_minutes(540), ClockTime::from_minutes(1020));
//! assert_eq!(range.to_string(), "9:00 AM – 5:00 PM");
//!
//! let status = OperationStatus::schedule_saved(1);
//! assert_eq!(status.to_string(), "Success: Saved schedule with ID: 1\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;

pub use collections::{Exercises, SavedSchedules};
pub use datetime::{ClockRange, LocalDateTime};
pub use status::OperationStatus;
