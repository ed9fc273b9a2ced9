//! Browse command - category-driven catalog browsing

use crate::SwaprError;
use crate::catalog::{QueryState, StatusFilter};
use crate::output;
use crate::store::CatalogSnapshot;

type Result<T> = std::result::Result<T, SwaprError>;

/// Execute the browse command
///
/// Renders the breadcrumb trail for the selected category, its direct
/// subcategories with listing counts, and one page of listings.
///
/// # Errors
/// Returns an error if the snapshot's categories are malformed or the
/// selected category does not exist.
pub fn execute(
    snapshot: &CatalogSnapshot,
    category: Option<String>,
    search: Option<String>,
    status: StatusFilter,
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
        if result.breadcrumbs.is_empty() {
            println!("Catalog");
        } else {
            println!("{}", output::trail(&result.breadcrumbs));
        }

        if !result.children.is_empty() {
            println!("\nSubcategories:");
            for child in &result.children {
                let count = snapshot
                    .listings
                    .iter()
                    .filter(|listing| {
                        listing.category == child.path && status.matches(listing.status)
                    })
                    .count();
                println!("{}", output::category_line(child, count, 0, quiet));
            }
        }

        println!("\nListings:");
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
