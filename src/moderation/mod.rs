//! Moderation decisions over listings and user accounts
//!
//! Status transitions are one-way: a pending entity is approved or
//! rejected, and both outcomes are terminal. Attempting to review an
//! already-reviewed entity is an error rather than a silent overwrite, and
//! the featured flag is only valid on approved listings.

pub mod error;

pub use error::ModerationError;

use crate::models::{Listing, ModerationStatus, User};

/// A moderator's verdict on a pending entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    /// The terminal status this decision produces
    #[must_use]
    pub const fn resulting_status(self) -> ModerationStatus {
        match self {
            Self::Approve => ModerationStatus::Approved,
            Self::Reject => ModerationStatus::Rejected,
        }
    }

    /// Verb form for user-facing messages
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Approve => "approved",
            Self::Reject => "rejected",
        }
    }
}

/// Apply a moderation decision to a listing
///
/// # Errors
/// Returns `ModerationError::AlreadyReviewed` when the listing is no
/// longer pending.
pub fn review_listing(
    listing: &mut Listing,
    decision: Decision,
) -> Result<ModerationStatus, ModerationError> {
    if listing.status.is_terminal() {
        return Err(ModerationError::AlreadyReviewed {
            id: listing.id.clone(),
            status: listing.status,
        });
    }

    listing.status = decision.resulting_status();
    Ok(listing.status)
}

/// Apply a moderation decision to a user account
///
/// # Errors
/// Returns `ModerationError::AlreadyReviewed` when the account is no
/// longer pending.
pub fn review_user(
    user: &mut User,
    decision: Decision,
) -> Result<ModerationStatus, ModerationError> {
    if user.status.is_terminal() {
        return Err(ModerationError::AlreadyReviewed {
            id: user.id.clone(),
            status: user.status,
        });
    }

    user.status = decision.resulting_status();
    Ok(user.status)
}

/// Set or clear a listing's featured flag
///
/// # Errors
/// Returns `ModerationError::NotApproved` when turning the flag on for a
/// listing that is not approved. Clearing the flag is always allowed.
pub fn set_featured(listing: &mut Listing, featured: bool) -> Result<(), ModerationError> {
    if featured && listing.status != ModerationStatus::Approved {
        return Err(ModerationError::NotApproved {
            id: listing.id.clone(),
            status: listing.status,
        });
    }

    listing.featured = featured;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModerationStatus::{Approved, Pending, Rejected};
    use crate::testing::{listing, user};

    #[test]
    fn test_pending_listing_can_be_approved() {
        let mut item = listing("Linen Shirt", "men/shirts", Pending);
        let status = review_listing(&mut item, Decision::Approve).unwrap();
        assert_eq!(status, Approved);
        assert_eq!(item.status, Approved);
    }

    #[test]
    fn test_pending_listing_can_be_rejected() {
        let mut item = listing("Linen Shirt", "men/shirts", Pending);
        review_listing(&mut item, Decision::Reject).unwrap();
        assert_eq!(item.status, Rejected);
    }

    #[test]
    fn test_terminal_status_cannot_be_reviewed_again() {
        let mut item = listing("Linen Shirt", "men/shirts", Approved);
        let err = review_listing(&mut item, Decision::Reject).unwrap_err();
        assert_eq!(
            err,
            ModerationError::AlreadyReviewed {
                id: item.id.clone(),
                status: Approved,
            }
        );
        // The status is untouched by the failed transition.
        assert_eq!(item.status, Approved);
    }

    #[test]
    fn test_user_review_follows_same_rules() {
        let mut account = user("priya", Pending);
        review_user(&mut account, Decision::Approve).unwrap();
        assert_eq!(account.status, Approved);

        let err = review_user(&mut account, Decision::Reject).unwrap_err();
        assert!(matches!(err, ModerationError::AlreadyReviewed { .. }));
    }

    #[test]
    fn test_only_approved_listings_can_be_featured() {
        let mut pending = listing("Wool Hat", "men/shirts", Pending);
        let err = set_featured(&mut pending, true).unwrap_err();
        assert!(matches!(err, ModerationError::NotApproved { .. }));
        assert!(!pending.featured);

        let mut approved = listing("Silk Scarf", "men/shirts", Approved);
        set_featured(&mut approved, true).unwrap();
        assert!(approved.featured);
    }

    #[test]
    fn test_unfeature_is_always_allowed() {
        let mut item = listing("Wool Hat", "men/shirts", Rejected);
        item.featured = true;
        set_featured(&mut item, false).unwrap();
        assert!(!item.featured);
    }
}
