//! Builder for creating and configuring Planner instances.

use std::sync::Arc;

use log::debug;

use super::Planner;
use crate::history::{HistoryStore, InMemoryHistory};

/// Builder for creating and configuring Planner instances.
#[derive(Default)]
pub struct PlannerBuilder {
    history: Option<Arc<dyn HistoryStore>>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { history: None }
    }

    /// Sets the store that receives generated schedules.
    ///
    /// If not specified, a fresh [`InMemoryHistory`] is used.
    pub fn with_history(mut self, history: Arc<dyn HistoryStore>) -> Self {
        self.history = Some(history);
        self
    }

    /// Builds the configured planner instance.
    pub fn build(self) -> Planner {
        let history = self.history.unwrap_or_else(|| {
            debug!("No history store configured, using in-memory history");
            Arc::new(InMemoryHistory::new())
        });
        Planner::new(history)
    }
}
