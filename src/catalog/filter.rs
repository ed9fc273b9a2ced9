//! Search and status filtering over listing and user collections
//!
//! Matching is deliberately plain: case-insensitive substring tests against
//! an explicit list of fields per entity type, AND'd with an exact status
//! predicate. No fuzzy matching, no ranking — a listing is either in the
//! result or it is not, and input order is preserved.
//!
//! The field lists are configuration, not convention: each surface states
//! which fields participate in its search box instead of concatenating
//! strings ad hoc.
//!
//! # Iterator Adapters
//!
//! [`ListingFilterExt`] adds fluent filtering to iterators over `&Listing`,
//! enabling the query pipeline to read as a chain:
//!
//! ```ignore
//! let matched = listings
//!     .iter()
//!     .in_category(Some("men/shirts"))
//!     .with_status(StatusFilter::Approved);
//! ```

use super::tree::CategoryTree;
use crate::models::{Listing, ModerationStatus, User};
use clap::ValueEnum;
use std::fmt;

/// Status predicate for moderation-aware views
///
/// `All` matches every status; the other variants require exact equality.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Approved,
    Rejected,
}

impl StatusFilter {
    /// Whether a concrete status passes this filter
    #[must_use]
    pub const fn matches(self, status: ModerationStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => matches!(status, ModerationStatus::Pending),
            Self::Approved => matches!(status, ModerationStatus::Approved),
            Self::Rejected => matches!(status, ModerationStatus::Rejected),
        }
    }
}

impl From<ModerationStatus> for StatusFilter {
    fn from(status: ModerationStatus) -> Self {
        match status {
            ModerationStatus::Pending => Self::Pending,
            ModerationStatus::Approved => Self::Approved,
            ModerationStatus::Rejected => Self::Rejected,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        };
        f.write_str(name)
    }
}

/// Listing fields that can participate in free-text search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingField {
    Title,
    Owner,
    /// Display name of the listing's category, resolved through the tree
    CategoryName,
    Description,
    Tags,
}

/// User fields that can participate in free-text search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Username,
    Email,
}

/// Search-field configuration for listing views
#[derive(Debug, Clone)]
pub struct ListingSearch {
    pub fields: Vec<ListingField>,
}

impl Default for ListingSearch {
    /// Title, owner, and category name — the fields the listing grids search
    fn default() -> Self {
        Self {
            fields: vec![
                ListingField::Title,
                ListingField::Owner,
                ListingField::CategoryName,
            ],
        }
    }
}

impl ListingSearch {
    /// Build a configuration with an explicit field list
    #[must_use]
    pub fn with_fields(fields: Vec<ListingField>) -> Self {
        Self { fields }
    }

    /// Whether a listing matches the search term
    ///
    /// An empty term matches everything. Matching is a case-insensitive
    /// substring test against each configured field; any single field
    /// matching is enough.
    #[must_use]
    pub fn matches(&self, listing: &Listing, term: &str, tree: &CategoryTree) -> bool {
        if term.is_empty() {
            return true;
        }

        let needle = term.to_lowercase();
        self.fields.iter().any(|field| match field {
            ListingField::Title => contains_term(&listing.title, &needle),
            ListingField::Owner => contains_term(&listing.owner, &needle),
            ListingField::CategoryName => tree
                .get(&listing.category)
                .is_some_and(|category| contains_term(&category.name, &needle)),
            ListingField::Description => contains_term(&listing.description, &needle),
            ListingField::Tags => listing.tags.iter().any(|tag| contains_term(tag, &needle)),
        })
    }
}

/// Search-field configuration for the admin user directory
#[derive(Debug, Clone)]
pub struct UserSearch {
    pub fields: Vec<UserField>,
}

impl Default for UserSearch {
    fn default() -> Self {
        Self {
            fields: vec![UserField::Username, UserField::Email],
        }
    }
}

impl UserSearch {
    /// Whether a user matches the search term (empty term matches all)
    #[must_use]
    pub fn matches(&self, user: &User, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }

        let needle = term.to_lowercase();
        self.fields.iter().any(|field| match field {
            UserField::Username => contains_term(&user.username, &needle),
            UserField::Email => contains_term(&user.email, &needle),
        })
    }
}

/// Case-insensitive substring test; `needle` must already be lowercased
fn contains_term(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Reduce a user collection to those matching the term and status filter
///
/// Both predicates are AND'd; input order is preserved.
#[must_use]
pub fn filter_users<'a>(
    users: impl IntoIterator<Item = &'a User>,
    term: &str,
    status: StatusFilter,
    search: &UserSearch,
) -> Vec<&'a User> {
    users
        .into_iter()
        .filter(|user| status.matches(user.status) && search.matches(user, term))
        .collect()
}

/// Extension trait for filtering iterators of `&Listing`
///
/// Each adapter collects into a `Vec` so stages can be chained with
/// `.into_iter()` between them; every stage preserves input order.
pub trait ListingFilterExt<'a>: IntoIterator<Item = &'a Listing> + Sized {
    /// Keep listings whose status passes `filter`
    fn with_status(self, filter: StatusFilter) -> Vec<&'a Listing> {
        self.into_iter()
            .filter(|listing| filter.matches(listing.status))
            .collect()
    }

    /// Keep listings in exactly the given category path
    ///
    /// `None` keeps everything — an unselected category is not a filter.
    fn in_category(self, path: Option<&str>) -> Vec<&'a Listing> {
        match path {
            Some(path) => self
                .into_iter()
                .filter(|listing| listing.category == path)
                .collect(),
            None => self.into_iter().collect(),
        }
    }

    /// Keep listings posted by exactly the given owner
    fn owned_by(self, owner: Option<&str>) -> Vec<&'a Listing> {
        match owner {
            Some(owner) => self
                .into_iter()
                .filter(|listing| listing.owner == owner)
                .collect(),
            None => self.into_iter().collect(),
        }
    }

    /// Keep listings matching the free-text term under `search`
    fn matching(self, term: &str, search: &ListingSearch, tree: &CategoryTree) -> Vec<&'a Listing> {
        self.into_iter()
            .filter(|listing| search.matches(listing, term, tree))
            .collect()
    }
}

impl<'a, I> ListingFilterExt<'a> for I where I: IntoIterator<Item = &'a Listing> {}
