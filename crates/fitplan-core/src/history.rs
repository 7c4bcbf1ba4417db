//! Append-only history of generated schedules.
//!
//! The planner never touches a global list; it is handed a [`HistoryStore`]
//! by [`crate::PlannerBuilder`]. [`InMemoryHistory`] is the default and keeps
//! entries for the lifetime of the process only.

use std::sync::{Mutex, MutexGuard};

use jiff::Timestamp;
use log::debug;

use crate::{
    error::{FitplanError, Result},
    models::{GeneratedSchedule, SavedSchedule},
};

/// Storage capability for generated schedules.
///
/// Implementations must serialize appends: two concurrent calls may not
/// receive the same ID or lose an entry.
pub trait HistoryStore: Send + Sync {
    /// Stores a schedule and returns it with its assigned ID and timestamp.
    fn append(&self, schedule: GeneratedSchedule) -> Result<SavedSchedule>;

    /// All stored schedules, oldest first.
    fn list(&self) -> Result<Vec<SavedSchedule>>;

    /// A single stored schedule by ID.
    fn get(&self, id: u64) -> Result<Option<SavedSchedule>> {
        Ok(self.list()?.into_iter().find(|saved| saved.id == id))
    }
}

/// Process-local history guarded by a mutex.
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    entries: Mutex<Vec<SavedSchedule>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<MutexGuard<'_, Vec<SavedSchedule>>> {
        self.entries.lock().map_err(|e| FitplanError::Storage {
            message: format!("history lock poisoned: {e}"),
        })
    }
}

impl HistoryStore for InMemoryHistory {
    fn append(&self, schedule: GeneratedSchedule) -> Result<SavedSchedule> {
        let mut entries = self.entries()?;
        let saved = SavedSchedule {
            id: entries.len() as u64 + 1,
            created_at: Timestamp::now(),
            schedule,
        };
        entries.push(saved.clone());
        debug!("Appended schedule {} to history", saved.id);
        Ok(saved)
    }

    fn list(&self) -> Result<Vec<SavedSchedule>> {
        Ok(self.entries()?.clone())
    }

    fn get(&self, id: u64) -> Result<Option<SavedSchedule>> {
        Ok(self.entries()?.iter().find(|saved| saved.id == id).cloned())
    }
}
