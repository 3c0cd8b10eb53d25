// Error types for the returns workflow

use thiserror::Error;
use uuid::Uuid;

use crate::action::ActionKind;

/// Result type alias for returns operations
pub type Result<T> = std::result::Result<T, ReturnsError>;

/// Errors that can occur while querying or mutating returns
#[derive(Debug, Error)]
pub enum ReturnsError {
    /// No return matches the given id
    #[error("Return not found: {0}")]
    NotFound(Uuid),

    /// Action code outside the enumerated set
    #[error("Invalid action code: {0}")]
    InvalidAction(i64),

    /// Action is valid but not currently allowed for this return
    #[error("Action '{action}' is not available for return {id}")]
    ActionNotAvailable { id: Uuid, action: ActionKind },
}
