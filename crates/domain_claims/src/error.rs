//! Claims workflow errors

use thiserror::Error;

use core_kernel::{ClaimId, PortError};

use crate::actor::Role;
use crate::claim::ClaimStatus;

/// Errors that can occur in the claims workflow
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Claim not found: {0}")]
    NotFound(ClaimId),

    #[error("Role {role} is not permitted to {action}")]
    Unauthorized { role: Role, action: String },

    #[error("Claim fails validation policy: {}", .messages.join("; "))]
    ValidationFailed { messages: Vec<String> },

    #[error("A non-empty reason is required to {action} a claim")]
    MissingReason { action: String },

    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: ClaimStatus, to: ClaimStatus },

    #[error("Storage error: {0}")]
    Storage(#[from] PortError),
}

impl WorkflowError {
    /// Maps a store failure for a specific claim, turning the adapter's
    /// NotFound into the workflow's own NotFound
    pub fn from_store(id: ClaimId, err: PortError) -> Self {
        if err.is_not_found() {
            WorkflowError::NotFound(id)
        } else {
            WorkflowError::Storage(err)
        }
    }

    /// Returns true if the referenced claim does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, WorkflowError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_store_maps_not_found() {
        let id = ClaimId::new_v7();
        let err = WorkflowError::from_store(id, PortError::not_found("Claim", id));
        assert!(err.is_not_found());

        let err = WorkflowError::from_store(id, PortError::connection("pool down"));
        assert!(matches!(err, WorkflowError::Storage(_)));
    }

    #[test]
    fn test_validation_failed_joins_messages() {
        let err = WorkflowError::ValidationFailed {
            messages: vec!["rate too low".to_string(), "too many sessions".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Claim fails validation policy: rate too low; too many sessions"
        );
    }
}
