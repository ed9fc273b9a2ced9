//! Featured and related-listing selection
//!
//! Small curated views over the listing collection: the featured rail on
//! the home page and the "similar items" strip on a listing's detail view.
//! Both only ever surface approved listings.

use crate::models::{Listing, ModerationStatus};

/// Default size of the featured rail
pub const FEATURED_LIMIT: usize = 5;

/// Default size of a similar-items strip
pub const SIMILAR_LIMIT: usize = 4;

/// Approved, featured listings, newest first, up to `limit`
#[must_use]
pub fn featured(listings: &[Listing], limit: usize) -> Vec<&Listing> {
    let mut rail: Vec<&Listing> = listings
        .iter()
        .filter(|listing| listing.status == ModerationStatus::Approved && listing.featured)
        .collect();

    rail.sort_by(|a, b| b.listed_at.cmp(&a.listed_at));
    rail.truncate(limit);
    rail
}

/// Listings similar to `subject`, up to `limit`
///
/// Same-category approved listings come first (excluding the subject
/// itself); when those do not fill the limit, the remainder is topped up
/// with approved listings sharing at least one tag with the subject.
#[must_use]
pub fn similar<'a>(listings: &'a [Listing], subject: &Listing, limit: usize) -> Vec<&'a Listing> {
    let mut related: Vec<&Listing> = listings
        .iter()
        .filter(|listing| {
            listing.id != subject.id
                && listing.status == ModerationStatus::Approved
                && listing.category == subject.category
        })
        .take(limit)
        .collect();

    if related.len() < limit && !subject.tags.is_empty() {
        for listing in listings {
            if related.len() >= limit {
                break;
            }
            if listing.id == subject.id
                || listing.status != ModerationStatus::Approved
                || related.iter().any(|seen| seen.id == listing.id)
            {
                continue;
            }
            if listing.tags.iter().any(|tag| subject.tags.contains(tag)) {
                related.push(listing);
            }
        }
    }

    related
}
