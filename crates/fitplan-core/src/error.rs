//! Error types for the fitplan library.

use thiserror::Error;

/// Comprehensive error type for all fitplan operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitplanError {
    /// Malformed "HH:MM" clock text
    #[error("Invalid clock time '{input}': {reason}")]
    ClockParse { input: String, reason: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// No catalog entry matches the requested name
    #[error("Exercise '{name}' not found")]
    ExerciseNotFound { name: String },
    /// Saved schedule not found for the given ID
    #[error("Schedule with ID {id} not found")]
    ScheduleNotFound { id: u64 },
    /// History store failures
    #[error("Storage error: {message}")]
    Storage { message: String },
}

/// Builder for creating clock parse errors.
pub struct ClockParseErrorBuilder {
    input: String,
}

impl ClockParseErrorBuilder {
    /// Create a new clock parse error builder for the offending text.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> FitplanError {
        FitplanError::ClockParse {
            input: self.input,
            reason: reason.into(),
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> FitplanError {
        FitplanError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl FitplanError {
    /// Creates a builder for clock parse errors.
    pub fn clock_parse(input: impl Into<String>) -> ClockParseErrorBuilder {
        ClockParseErrorBuilder::new(input)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether the error was caused by caller-supplied data rather than
    /// the process itself.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, FitplanError::Storage { .. })
    }
}

/// Result type alias for fitplan operations
pub type Result<T> = std::result::Result<T, FitplanError>;
