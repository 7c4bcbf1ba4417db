//! Status messages shown ahead of operation output.

use std::fmt;

/// A one-line success notice.
///
/// The CLI prints it above a generated schedule; the MCP server prepends it
/// to tool results. Failures travel as errors instead.
pub struct OperationStatus {
    pub message: String,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Notice for a schedule that was appended to the history.
    pub fn schedule_saved(id: u64) -> Self {
        Self::success(format!("Saved schedule with ID: {id}"))
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Success: {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        assert_eq!(
            OperationStatus::schedule_saved(4).to_string(),
            "Success: Saved schedule with ID: 4\n"
        );
        assert_eq!(
            OperationStatus::success("Done").to_string(),
            "Success: Done\n"
        );
    }
}
