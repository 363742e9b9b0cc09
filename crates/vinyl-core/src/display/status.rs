//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::models::Outcome;

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }
}

impl<T> From<&Outcome<T>> for OperationStatus {
    fn from(outcome: &Outcome<T>) -> Self {
        Self {
            message: outcome.message().to_string(),
            success: outcome.is_success(),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}
