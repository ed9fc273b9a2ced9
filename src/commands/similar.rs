//! Similar command - related listings for a subject listing

use crate::SwaprError;
use crate::catalog::related;
use crate::output;
use crate::store::CatalogSnapshot;

type Result<T> = std::result::Result<T, SwaprError>;

/// Execute the similar command
///
/// # Errors
/// Returns an error when the subject listing id does not exist in the
/// snapshot.
pub fn execute(snapshot: &CatalogSnapshot, id: &str, limit: usize, quiet: bool) -> Result<()> {
    let subject = snapshot.listing(id)?;
    let related = related::similar(&snapshot.listings, subject, limit);

    if !quiet {
        println!("Similar to {}:", subject.title);
        if related.is_empty() {
            println!("  (no similar listings)");
        }
    }

    for listing in related {
        println!("{}", output::listing_line(listing, quiet));
    }

    Ok(())
}
