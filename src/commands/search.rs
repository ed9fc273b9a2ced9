//! Search command - free-text catalog search

use crate::SwaprError;
use crate::catalog::{QueryState, SortOrder, StatusFilter};
use crate::cli::OutputFormat;
use crate::output;
use crate::store::CatalogSnapshot;
use std::io;

type Result<T> = std::result::Result<T, SwaprError>;

/// Execute the search command
///
/// Searches the whole catalog (no category selection) and renders one page
/// of results in the requested format. `json` and `csv` emit only the page
/// slice, suitable for piping.
///
/// # Errors
/// Returns an error if the snapshot's categories are malformed or output
/// serialization fails.
#[allow(clippy::too_many_arguments)]
pub fn execute(
    snapshot: &CatalogSnapshot,
    term: Option<String>,
    status: StatusFilter,
    owner: Option<String>,
    sort: SortOrder,
    format: OutputFormat,
    page: usize,
    page_size: usize,
    quiet: bool,
) -> Result<()> {
    let engine = snapshot.engine()?;

    let state = QueryState::new()
        .with_page_size(page_size)
        .with_status(status)
        .with_owner(owner)
        .with_sort(sort)
        .with_search_term(term.unwrap_or_default())
        .with_page(page);

    let result = engine.query(&snapshot.listings, &state)?;

    match format {
        OutputFormat::Table => {
            if result.items.is_empty() && !quiet {
                println!("No listings match.");
            }
            for listing in &result.items {
                println!("{}", output::listing_line(listing, quiet));
            }
            if !quiet {
                println!(
                    "\n{}",
                    output::page_footer(
                        result.page,
                        result.total_pages,
                        result.total_count,
                        "listing"
                    )
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result.items)?);
        }
        OutputFormat::Csv => {
            output::write_listings_csv(&result.items, io::stdout())?;
        }
    }

    Ok(())
}
