//! Core domain types for the exchange catalog
//!
//! These are pure data structures with minimal logic. Conversions and
//! queries over them live in the `catalog` module; moderation rules live
//! in `moderation`. Direct field access is used for comparisons and
//! filtering (idiomatic Rust style).

use chrono::{DateTime, Utc};
use heck::ToKebabCase;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between segments of a category path (e.g. `men/shirts`)
pub const PATH_DELIMITER: char = '/';

/// Derive a URL/path-safe slug from a display name
///
/// # Examples
/// ```
/// # use swapr::models::slugify;
/// assert_eq!(slugify("T-Shirts"), "t-shirts");
/// assert_eq!(slugify("Winter Jackets"), "winter-jackets");
/// ```
#[must_use]
pub fn slugify(name: &str) -> String {
    name.to_kebab_case()
}

/// Moderation status shared by listings and user accounts
///
/// `Pending` is the only non-terminal state; see `moderation` for the
/// transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ModerationStatus {
    /// Whether this status permits no further transitions
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Lowercase string form, matching the snapshot wire format
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the category hierarchy
///
/// `path` is the unique slug chain identifying the category's position
/// (e.g. `men/shirts`); `parent`, when present, is the `path` of an
/// existing category. Root categories have no parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Short identifier (the final path segment)
    pub id: String,

    /// Human-readable label
    pub name: String,

    /// Unique slug chain locating this category in the hierarchy
    pub path: String,

    /// Path of the parent category, absent for roots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl Category {
    /// Create a category under an optional parent path
    ///
    /// The path segment is derived from `name` via [`slugify`].
    ///
    /// # Examples
    /// ```
    /// # use swapr::models::Category;
    /// let root = Category::new("Men", None);
    /// assert_eq!(root.path, "men");
    ///
    /// let child = Category::new("T-Shirts", Some("men"));
    /// assert_eq!(child.path, "men/t-shirts");
    /// assert_eq!(child.parent.as_deref(), Some("men"));
    /// ```
    #[must_use]
    pub fn new(name: &str, parent: Option<&str>) -> Self {
        let id = slugify(name);
        let path = match parent {
            Some(parent_path) => format!("{parent_path}{PATH_DELIMITER}{id}"),
            None => id.clone(),
        };

        Self {
            id,
            name: name.to_string(),
            path,
            parent: parent.map(str::to_string),
        }
    }

    /// Depth of this category in the hierarchy (roots are depth 1)
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.matches(PATH_DELIMITER).count() + 1
    }
}

/// A clothing item posted for exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique identifier
    pub id: String,

    /// Short title shown in listing grids
    pub title: String,

    /// Longer free-form description
    pub description: String,

    /// Path of the category this listing belongs to
    pub category: String,

    /// Garment size label (e.g. "M", "42")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Condition label (e.g. "like new")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    /// Free-form tags for discovery
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Username of the member who posted the listing
    pub owner: String,

    /// Moderation status
    pub status: ModerationStatus,

    /// Whether the listing is promoted on the featured rail
    #[serde(default)]
    pub featured: bool,

    /// When the listing was posted
    pub listed_at: DateTime<Utc>,
}

/// A member account, as seen by the moderation queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: String,

    /// Login / display name
    pub username: String,

    /// Contact address
    pub email: String,

    /// Moderation status
    pub status: ModerationStatus,

    /// When the account was registered
    pub registered_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Shirts"), "shirts");
        assert_eq!(slugify("T-Shirts"), "t-shirts");
        assert_eq!(slugify("Winter Jackets"), "winter-jackets");
    }

    #[test]
    fn test_category_new_root() {
        let root = Category::new("Women", None);
        assert_eq!(root.id, "women");
        assert_eq!(root.path, "women");
        assert_eq!(root.parent, None);
        assert_eq!(root.depth(), 1);
    }

    #[test]
    fn test_category_new_nested() {
        let child = Category::new("Dresses", Some("women"));
        assert_eq!(child.path, "women/dresses");
        assert_eq!(child.parent.as_deref(), Some("women"));
        assert_eq!(child.depth(), 2);

        let grandchild = Category::new("Evening", Some(&child.path));
        assert_eq!(grandchild.path, "women/dresses/evening");
        assert_eq!(grandchild.depth(), 3);
    }

    #[test]
    fn test_status_terminality() {
        assert!(!ModerationStatus::Pending.is_terminal());
        assert!(ModerationStatus::Approved.is_terminal());
        assert!(ModerationStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_status_serde_roundtrip() {
        let json = serde_json::to_string(&ModerationStatus::Approved).unwrap();
        assert_eq!(json, "\"approved\"");

        let parsed: ModerationStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(parsed, ModerationStatus::Pending);
    }

    #[test]
    fn test_listing_optional_fields_default() {
        let json = r#"{
            "id": "l1",
            "title": "Blue Denim Jacket",
            "description": "Lightly worn",
            "category": "men/jackets",
            "owner": "priya",
            "status": "approved",
            "listed_at": "2025-06-01T12:00:00Z"
        }"#;

        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.size, None);
        assert_eq!(listing.condition, None);
        assert!(listing.tags.is_empty());
        assert!(!listing.featured);
    }
}
