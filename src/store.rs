//! Catalog snapshot loading and persistence
//!
//! A snapshot is the in-memory `(categories, listings, users)` triple the
//! query engine consumes, read from and written to a plain JSON file in one
//! piece. The store is deliberately not a database: the engine owns no
//! durable data, and whoever refreshes the snapshot file plays the
//! data-fetch role.

use crate::catalog::{CatalogError, CatalogQueryEngine};
use crate::models::{Category, Listing, ModerationStatus, User};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or saving a snapshot
#[derive(Debug, Error)]
pub enum StoreError {
    /// The snapshot file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot file is not valid JSON for the expected shape
    #[error("invalid snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    /// No listing with the requested id exists in the snapshot
    #[error("listing not found: '{0}'")]
    ListingNotFound(String),

    /// No user with the requested id exists in the snapshot
    #[error("user not found: '{0}'")]
    UserNotFound(String),
}

/// One catalog snapshot: everything a render needs, in memory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub listings: Vec<Listing>,

    #[serde(default)]
    pub users: Vec<User>,
}

impl CatalogSnapshot {
    /// Read a snapshot from a JSON file
    ///
    /// # Errors
    /// Returns `StoreError::Io` when the file cannot be read and
    /// `StoreError::Parse` when its contents are not a valid snapshot.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Write the snapshot back to a JSON file, creating parent directories
    ///
    /// # Errors
    /// Returns `StoreError::Io` when the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut contents = serde_json::to_string_pretty(self)?;
        contents.push('\n');
        fs::write(path, contents)?;
        Ok(())
    }

    /// Build a query engine for this snapshot's categories
    ///
    /// # Errors
    /// Returns `CatalogError::MalformedTree` when the snapshot's category
    /// collection is structurally invalid.
    pub fn engine(&self) -> Result<CatalogQueryEngine, CatalogError> {
        CatalogQueryEngine::new(self.categories.clone())
    }

    /// Look up a listing by id
    ///
    /// # Errors
    /// Returns `StoreError::ListingNotFound` when no listing matches.
    pub fn listing(&self, id: &str) -> Result<&Listing, StoreError> {
        self.listings
            .iter()
            .find(|listing| listing.id == id)
            .ok_or_else(|| StoreError::ListingNotFound(id.to_string()))
    }

    /// Look up a listing by id for mutation
    ///
    /// # Errors
    /// Returns `StoreError::ListingNotFound` when no listing matches.
    pub fn listing_mut(&mut self, id: &str) -> Result<&mut Listing, StoreError> {
        self.listings
            .iter_mut()
            .find(|listing| listing.id == id)
            .ok_or_else(|| StoreError::ListingNotFound(id.to_string()))
    }

    /// Look up a user by id for mutation
    ///
    /// # Errors
    /// Returns `StoreError::UserNotFound` when no user matches.
    pub fn user_mut(&mut self, id: &str) -> Result<&mut User, StoreError> {
        self.users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| StoreError::UserNotFound(id.to_string()))
    }

    /// A small deterministic catalog for demos and first-time setup
    #[must_use]
    pub fn sample() -> Self {
        let men = Category::new("Men", None);
        let women = Category::new("Women", None);
        let categories = vec![
            men.clone(),
            Category::new("Shirts", Some(&men.path)),
            Category::new("Jackets", Some(&men.path)),
            Category::new("Shoes", Some(&men.path)),
            women.clone(),
            Category::new("Dresses", Some(&women.path)),
            Category::new("Skirts", Some(&women.path)),
            Category::new("Accessories", Some(&women.path)),
        ];

        let listings = vec![
            sample_listing(
                "l-001",
                "Blue Denim Jacket",
                "Classic fit, lightly faded.",
                "men/jackets",
                "priya",
                ModerationStatus::Approved,
                true,
                &["denim", "casual"],
                2,
            ),
            sample_listing(
                "l-002",
                "Linen Summer Shirt",
                "Breathable, size M.",
                "men/shirts",
                "marco",
                ModerationStatus::Approved,
                false,
                &["summer", "linen"],
                5,
            ),
            sample_listing(
                "l-003",
                "Flannel Shirt",
                "Warm red check, barely worn.",
                "men/shirts",
                "ayesha",
                ModerationStatus::Pending,
                false,
                &["winter"],
                1,
            ),
            sample_listing(
                "l-004",
                "Leather Boots",
                "Resoled last year, size 43.",
                "men/shoes",
                "marco",
                ModerationStatus::Approved,
                true,
                &["leather", "winter"],
                9,
            ),
            sample_listing(
                "l-005",
                "Floral Midi Dress",
                "Worn once for a wedding.",
                "women/dresses",
                "sofia",
                ModerationStatus::Approved,
                true,
                &["summer", "floral"],
                3,
            ),
            sample_listing(
                "l-006",
                "Pleated Skirt",
                "Navy, knee length.",
                "women/skirts",
                "ayesha",
                ModerationStatus::Pending,
                false,
                &[],
                0,
            ),
            sample_listing(
                "l-007",
                "Silk Scarf",
                "Hand-rolled edges.",
                "women/accessories",
                "sofia",
                ModerationStatus::Approved,
                false,
                &["silk"],
                12,
            ),
            sample_listing(
                "l-008",
                "Torn Raincoat",
                "Needs a new zipper.",
                "men/jackets",
                "dmitri",
                ModerationStatus::Rejected,
                false,
                &[],
                7,
            ),
        ];

        let users = vec![
            sample_user("u-001", "priya", ModerationStatus::Approved, 40),
            sample_user("u-002", "marco", ModerationStatus::Approved, 32),
            sample_user("u-003", "ayesha", ModerationStatus::Pending, 6),
            sample_user("u-004", "sofia", ModerationStatus::Approved, 21),
            sample_user("u-005", "dmitri", ModerationStatus::Pending, 2),
        ];

        Self {
            categories,
            listings,
            users,
        }
    }
}

// Timestamps in the sample are fixed offsets from a constant base so the
// generated catalog is identical on every run.
const SAMPLE_BASE_DAYS: i64 = 20_240;

fn sample_day(days_ago: i64) -> DateTime<Utc> {
    DateTime::UNIX_EPOCH + Duration::days(SAMPLE_BASE_DAYS - days_ago)
}

#[allow(clippy::too_many_arguments)]
fn sample_listing(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    owner: &str,
    status: ModerationStatus,
    featured: bool,
    tags: &[&str],
    days_ago: i64,
) -> Listing {
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        size: None,
        condition: None,
        tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
        owner: owner.to_string(),
        status,
        featured,
        listed_at: sample_day(days_ago),
    }
}

fn sample_user(id: &str, username: &str, status: ModerationStatus, days_ago: i64) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        status,
        registered_at: sample_day(days_ago),
    }
}
