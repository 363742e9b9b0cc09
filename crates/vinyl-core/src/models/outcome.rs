//! Success-or-message results for writes that can be rejected by business
//! rules.

use serde::Serialize;

/// Result of a write that may be refused by a store constraint.
///
/// Constraint violations (duplicate username, duplicate favorite, second
/// review, ...) are expected and are reported here instead of as
/// [`crate::CabinetError`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome<T = ()> {
    Success { value: T, message: String },
    Failure { message: String },
}

impl<T> Outcome<T> {
    pub fn success(value: T, message: impl Into<String>) -> Self {
        Outcome::Success {
            value,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Outcome::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// User-facing message for either branch.
    pub fn message(&self) -> &str {
        match self {
            Outcome::Success { message, .. } | Outcome::Failure { message } => message,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success { value, .. } => Some(value),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Success { value, .. } => Some(value),
            Outcome::Failure { .. } => None,
        }
    }
}
