//! Output formatting for CLI display
//!
//! This module provides utilities for formatting query results in the CLI:
//! status badges, listing and user lines, breadcrumb trails, category tree
//! rows, and pagination footers. Quiet mode strips decoration down to the
//! bare identifiers for scripting.

use crate::catalog::{Breadcrumb, PageToken, page_window};
use crate::models::{Category, Listing, ModerationStatus, User};
use colored::Colorize;
use std::io::Write;

/// Pages shown on each side of the current page in the footer controls
const PAGE_WINDOW_DELTA: usize = 2;

/// Color-coded status label
#[must_use]
pub fn status_badge(status: ModerationStatus) -> String {
    match status {
        ModerationStatus::Pending => status.as_str().yellow().to_string(),
        ModerationStatus::Approved => status.as_str().green().to_string(),
        ModerationStatus::Rejected => status.as_str().red().to_string(),
    }
}

/// Format a listing for display
#[must_use]
pub fn listing_line(listing: &Listing, quiet: bool) -> String {
    if quiet {
        return listing.id.clone();
    }

    let star = if listing.featured { "* " } else { "" };
    format!(
        "  {}{} [{}] by {} — {}",
        star,
        listing.title.bold(),
        listing.category,
        listing.owner,
        status_badge(listing.status)
    )
}

/// Format a user for the admin directory
#[must_use]
pub fn user_line(user: &User, quiet: bool) -> String {
    if quiet {
        return user.id.clone();
    }

    format!(
        "  {} <{}> — {}",
        user.username.bold(),
        user.email,
        status_badge(user.status)
    )
}

/// Render a breadcrumb trail, highlighting the active crumb
#[must_use]
pub fn trail(breadcrumbs: &[Breadcrumb]) -> String {
    let crumbs: Vec<String> = breadcrumbs
        .iter()
        .map(|crumb| {
            if crumb.active {
                crumb.label.bold().to_string()
            } else {
                crumb.label.clone()
            }
        })
        .collect();

    crumbs.join(" > ")
}

/// Format a category tree row, indented by depth
#[must_use]
pub fn category_line(category: &Category, listing_count: usize, depth: usize, quiet: bool) -> String {
    if quiet {
        return category.path.clone();
    }

    let indent = "  ".repeat(depth + 1);
    format!(
        "{}{} ({} listing(s))",
        indent,
        category.name,
        listing_count
    )
}

/// Pagination footer: position, total, and compact page controls
#[must_use]
pub fn page_footer(page: usize, total_pages: usize, total_count: usize, noun: &str) -> String {
    let mut footer = format!("Page {page} of {total_pages} — {total_count} {noun}(s)");

    let window = page_window(page, total_pages, PAGE_WINDOW_DELTA);
    if !window.is_empty() {
        let controls: Vec<String> = window
            .iter()
            .map(|token| match token {
                PageToken::Page(n) if *n == page => format!("[{n}]"),
                PageToken::Page(n) => n.to_string(),
                PageToken::Gap => "…".to_string(),
            })
            .collect();
        footer.push_str(&format!("  {}", controls.join(" ").dimmed()));
    }

    footer
}

/// Write listings as CSV rows
///
/// # Errors
/// Returns `csv::Error` if serialization or the underlying write fails.
pub fn write_listings_csv<W: Write>(listings: &[Listing], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "id", "title", "category", "owner", "status", "featured", "listed_at",
    ])?;

    for listing in listings {
        csv_writer.write_record([
            listing.id.as_str(),
            listing.title.as_str(),
            listing.category.as_str(),
            listing.owner.as_str(),
            listing.status.as_str(),
            if listing.featured { "true" } else { "false" },
            &listing.listed_at.to_rfc3339(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
