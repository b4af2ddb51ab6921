//! Error Types

use thiserror::Error;

use crate::member::MemberId;

/// Result type alias for hub operations
pub type Result<T> = std::result::Result<T, HubError>;

/// Hub error types
#[derive(Error, Debug)]
pub enum HubError {
    /// Admin credentials did not match
    #[error("Invalid username or password.")]
    InvalidCredentials,

    /// Settings change attempted without an admin session
    #[error("Not authenticated")]
    Unauthenticated,

    /// Member id not present in the store
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),

    /// Removal confirmed without a pending request
    #[error("No removal pending confirmation")]
    NoPendingRemoval,

    /// Filter string could not be parsed
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HubError {
    /// Convert to a message fit for the page
    pub fn user_message(&self) -> String {
        match self {
            HubError::InvalidCredentials => "Invalid username or password.".into(),
            HubError::Unauthenticated => "Please log in to change settings.".into(),
            HubError::MemberNotFound(id) => format!("Member {} no longer exists.", id),
            HubError::NoPendingRemoval => "Nothing to remove.".into(),
            HubError::InvalidFilter(value) => format!("Unknown filter '{}'.", value),
            HubError::Json(_) => "An unexpected error occurred.".into(),
        }
    }
}
