//! Typed failures for every household operation.
//!
//! Nothing in the backend silently ignores an unknown id or a failed
//! precondition: each case comes back as a `DomainError` and the state is
//! left exactly as it was before the call.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Child not found: {0}")]
    ChildNotFound(String),

    #[error("Chore not found: {0}")]
    ChoreNotFound(String),

    #[error("Reward not found: {0}")]
    RewardNotFound(String),

    #[error("Child {child_id} has {available} XP but {required} XP is required")]
    InsufficientXp {
        child_id: String,
        required: u32,
        available: u32,
    },

    #[error("Reward {reward_id} was already claimed by {claimed_by}")]
    RewardAlreadyClaimed {
        reward_id: String,
        claimed_by: String,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Household storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl DomainError {
    /// True for the three unknown-id variants
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::ChildNotFound(_) | DomainError::ChoreNotFound(_) | DomainError::RewardNotFound(_)
        )
    }
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DomainError::InsufficientXp {
            child_id: "child::1".to_string(),
            required: 50,
            available: 20,
        };
        assert_eq!(err.to_string(), "Child child::1 has 20 XP but 50 XP is required");

        let err = DomainError::RewardAlreadyClaimed {
            reward_id: "reward::1".to_string(),
            claimed_by: "child::2".to_string(),
        };
        assert_eq!(err.to_string(), "Reward reward::1 was already claimed by child::2");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::ChildNotFound("x".to_string()).is_not_found());
        assert!(DomainError::ChoreNotFound("x".to_string()).is_not_found());
        assert!(DomainError::RewardNotFound("x".to_string()).is_not_found());
        assert!(!DomainError::Validation("x".to_string()).is_not_found());
    }
}
