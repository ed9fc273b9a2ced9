//! Categories command - render the category tree with listing counts

use crate::SwaprError;
use crate::catalog::CategoryTree;
use crate::models::Listing;
use crate::output;
use crate::store::CatalogSnapshot;

type Result<T> = std::result::Result<T, SwaprError>;

/// Execute the categories command
///
/// Prints the tree depth-first in input order, each row with the number of
/// listings directly in that category.
///
/// # Errors
/// Returns an error if the snapshot's categories are malformed.
pub fn execute(snapshot: &CatalogSnapshot, quiet: bool) -> Result<()> {
    let engine = snapshot.engine()?;

    if !quiet {
        println!("Categories:");
        if engine.tree().is_empty() {
            println!("  (no categories)");
        }
    }

    walk(engine.tree(), &snapshot.listings, None, 0, quiet);
    Ok(())
}

fn walk(
    tree: &CategoryTree,
    listings: &[Listing],
    parent: Option<&str>,
    depth: usize,
    quiet: bool,
) {
    for category in tree.children_of(parent) {
        let count = listings
            .iter()
            .filter(|listing| listing.category == category.path)
            .count();
        println!("{}", output::category_line(category, count, depth, quiet));
        walk(tree, listings, Some(&category.path), depth + 1, quiet);
    }
}
