//! Testing utilities for swapr
//!
//! Builders for domain values with sensible defaults, so tests state only
//! what they are about. Only available when compiled with `cfg(test)`.

use crate::models::{Category, Listing, ModerationStatus, User, slugify};
use chrono::{DateTime, Duration, Utc};

/// Build a category from its path
///
/// The id and display name are derived from the final path segment (name
/// title-cased), and the parent from the leading segments.
///
/// # Examples
/// ```ignore
/// let cat = category("men/shirts");
/// assert_eq!(cat.name, "Shirts");
/// assert_eq!(cat.parent.as_deref(), Some("men"));
/// ```
#[must_use]
pub fn category(path: &str) -> Category {
    let (parent, id) = match path.rsplit_once('/') {
        Some((parent, id)) => (Some(parent.to_string()), id),
        None => (None, path),
    };

    let mut name = id.replace('-', " ");
    if !name.is_empty() {
        let capital = name[..1].to_uppercase();
        name.replace_range(..1, &capital);
    }

    Category {
        id: id.to_string(),
        name,
        path: path.to_string(),
        parent,
    }
}

/// Build a listing with defaults for everything but the essentials
#[must_use]
pub fn listing(title: &str, category: &str, status: ModerationStatus) -> Listing {
    Listing {
        id: slugify(title),
        title: title.to_string(),
        description: String::new(),
        category: category.to_string(),
        size: None,
        condition: None,
        tags: Vec::new(),
        owner: "ayesha".to_string(),
        status,
        featured: false,
        listed_at: DateTime::UNIX_EPOCH,
    }
}

/// Build a user whose email is `<username>@example.com`
#[must_use]
pub fn user(username: &str, status: ModerationStatus) -> User {
    User {
        id: format!("u-{username}"),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        status,
        registered_at: DateTime::UNIX_EPOCH + Duration::days(20_000),
    }
}

/// Re-stamp a listing as posted the given number of days ago
///
/// "Ago" is relative to a fixed base, so orderings are deterministic.
#[must_use]
pub fn listed_days_ago(mut listing: Listing, days: i64) -> Listing {
    listing.listed_at = DateTime::<Utc>::UNIX_EPOCH + Duration::days(20_000 - days);
    listing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_builder_derives_fields() {
        let root = category("men");
        assert_eq!(root.name, "Men");
        assert_eq!(root.parent, None);

        let child = category("men/t-shirts");
        assert_eq!(child.id, "t-shirts");
        assert_eq!(child.name, "T shirts");
        assert_eq!(child.parent.as_deref(), Some("men"));
    }

    #[test]
    fn test_listing_builder_defaults() {
        let item = listing("Linen Shirt", "men/shirts", ModerationStatus::Pending);
        assert_eq!(item.id, "linen-shirt");
        assert!(!item.featured);
        assert!(item.tags.is_empty());
    }

    #[test]
    fn test_listed_days_ago_orders() {
        let newer = listed_days_ago(listing("A", "men", ModerationStatus::Pending), 1);
        let older = listed_days_ago(listing("B", "men", ModerationStatus::Pending), 5);
        assert!(newer.listed_at > older.listed_at);
    }
}
