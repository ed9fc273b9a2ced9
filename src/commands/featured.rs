//! Featured command - the home page's curated rail

use crate::SwaprError;
use crate::catalog::related;
use crate::output;
use crate::store::CatalogSnapshot;

type Result<T> = std::result::Result<T, SwaprError>;

/// Execute the featured command
///
/// # Errors
/// Currently infallible beyond the standard result plumbing; kept fallible
/// for parity with the other commands.
pub fn execute(snapshot: &CatalogSnapshot, limit: usize, quiet: bool) -> Result<()> {
    let rail = related::featured(&snapshot.listings, limit);

    if !quiet {
        println!("Featured listings:");
        if rail.is_empty() {
            println!("  (nothing is featured)");
        }
    }

    for listing in rail {
        println!("{}", output::listing_line(listing, quiet));
    }

    Ok(())
}
