//! Error handling module for lincoln-tui
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the application should use these types for consistency.

use thiserror::Error;

/// Main error type for lincoln-tui
#[derive(Error, Debug)]
pub enum LincolnTuiError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog errors (unknown ids, malformed entries)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Validation errors (form input, booking request values)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// State errors (invalid screen state)
    #[error("State error: {0}")]
    State(String),

    /// Booking wizard transition errors
    #[error("Booking transition error: {0}")]
    BookingTransition(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for lincoln-tui operations
pub type Result<T> = std::result::Result<T, LincolnTuiError>;

// Convenient error constructors
impl LincolnTuiError {
    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a state error
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// Create a booking transition error
    pub fn booking_transition(msg: impl Into<String>) -> Self {
        Self::BookingTransition(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}

/// Helper function to create general errors
pub fn general_error(msg: impl Into<String>) -> LincolnTuiError {
    LincolnTuiError::General(msg.into())
}
