//! Admin commands - moderation queues and review actions
//!
//! The queue views (`users`, `listings`) are read-only renders of the same
//! query pipeline the public views use, defaulting to all statuses. The
//! review actions mutate the snapshot in memory and write it back whole.

use crate::SwaprError;
use crate::catalog::{QueryState, StatusFilter, UserQueryEngine};
use crate::cli::ReviewTarget;
use crate::moderation::{self, Decision};
use crate::output;
use crate::store::CatalogSnapshot;
use std::io::{self, Write};
use std::path::Path;

type Result<T> = std::result::Result<T, SwaprError>;

/// Execute the admin users queue
///
/// # Errors
/// Infallible beyond the standard result plumbing.
pub fn users(
    snapshot: &CatalogSnapshot,
    search: Option<String>,
    status: StatusFilter,
    page: usize,
    page_size: usize,
    quiet: bool,
) -> Result<()> {
    let engine = UserQueryEngine::new();

    let state = QueryState::new()
        .with_page_size(page_size)
        .with_status(status)
        .with_search_term(search.unwrap_or_default())
        .with_page(page);

    let paged = engine.query(&snapshot.users, &state);

    if !quiet {
        println!("Users ({status}):");
        if paged.items.is_empty() {
            println!("  (no users match)");
        }
    }

    for user in &paged.items {
        println!("{}", output::user_line(user, quiet));
    }

    if !quiet {
        println!(
            "\n{}",
            output::page_footer(paged.page, paged.total_pages, paged.total_count, "user")
        );
    }

    Ok(())
}

/// Execute the admin listings queue
///
/// # Errors
/// Returns an error if the snapshot's categories are malformed or the
/// category scope does not exist.
pub fn listings(
    snapshot: &CatalogSnapshot,
    search: Option<String>,
    status: StatusFilter,
    category: Option<String>,
    page: usize,
    page_size: usize,
    quiet: bool,
) -> Result<()> {
    let engine = snapshot.engine()?;

    let state = QueryState::new()
        .with_page_size(page_size)
        .with_status(status)
        .with_category(category)
        .with_search_term(search.unwrap_or_default())
        .with_page(page);

    let result = engine.query(&snapshot.listings, &state)?;

    if !quiet {
        println!("Listings ({status}):");
        if result.items.is_empty() {
            println!("  (no listings match)");
        }
    }

    for listing in &result.items {
        println!("{}", output::listing_line(listing, quiet));
    }

    if !quiet {
        println!(
            "\n{}",
            output::page_footer(result.page, result.total_pages, result.total_count, "listing")
        );
    }

    Ok(())
}

/// Execute an approve/reject action and persist the snapshot
///
/// Rejection prompts for confirmation unless `force` or quiet mode is set.
///
/// # Errors
/// Returns an error when the target does not exist, has already been
/// reviewed, or the snapshot cannot be written back.
pub fn review(
    snapshot: &mut CatalogSnapshot,
    snapshot_path: &Path,
    target: ReviewTarget,
    id: &str,
    decision: Decision,
    force: bool,
    quiet: bool,
) -> Result<()> {
    if decision == Decision::Reject && !force && !quiet && !confirm(&format!("Reject '{id}'?"))? {
        println!("Cancelled.");
        return Ok(());
    }

    let status = match target {
        ReviewTarget::Listing => {
            let listing = snapshot.listing_mut(id)?;
            moderation::review_listing(listing, decision)?
        }
        ReviewTarget::User => {
            let user = snapshot.user_mut(id)?;
            moderation::review_user(user, decision)?
        }
    };

    snapshot.save(snapshot_path)?;

    if !quiet {
        println!("'{id}' {} (status: {})", decision.verb(), output::status_badge(status));
    }

    Ok(())
}

/// Execute a feature/unfeature action and persist the snapshot
///
/// # Errors
/// Returns an error when the listing does not exist, is not approved, or
/// the snapshot cannot be written back.
pub fn feature(
    snapshot: &mut CatalogSnapshot,
    snapshot_path: &Path,
    id: &str,
    featured: bool,
    quiet: bool,
) -> Result<()> {
    let listing = snapshot.listing_mut(id)?;
    moderation::set_featured(listing, featured)?;

    snapshot.save(snapshot_path)?;

    if !quiet {
        if featured {
            println!("'{id}' added to the featured rail");
        } else {
            println!("'{id}' removed from the featured rail");
        }
    }

    Ok(())
}

/// Prompt user for yes/no confirmation
fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/n]: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let response = input.trim().to_lowercase();

    Ok(matches!(response.as_str(), "y" | "yes"))
}
