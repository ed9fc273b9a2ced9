//! Moderation-specific error types

use crate::models::ModerationStatus;
use thiserror::Error;

/// Violations of the moderation transition rules
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModerationError {
    /// The entity already carries a terminal status
    #[error("'{id}' has already been reviewed (status: {status})")]
    AlreadyReviewed { id: String, status: ModerationStatus },

    /// Only approved listings may be featured
    #[error("only approved listings can be featured; '{id}' is {status}")]
    NotApproved { id: String, status: ModerationStatus },
}
