//! Breadcrumb trail derivation
//!
//! Turns a selected category path into the root-to-current trail the view
//! renders, plus the selection's direct children for the sidebar. The trail
//! comes from the validated [`CategoryTree`] rather than from splitting the
//! path string, so a selection that no longer exists in the snapshot fails
//! with `CategoryNotFound` instead of rendering a stale trail — the caller
//! falls back to the root selection explicitly.

use super::error::CatalogError;
use super::tree::CategoryTree;
use crate::models::Category;
use serde::Serialize;

/// One entry in a breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    /// Display label (the category's name)
    pub label: String,
    /// Category path this crumb navigates to
    pub path: String,
    /// Whether this crumb is the current selection (always the last entry)
    pub active: bool,
}

/// A resolved trail: the crumbs plus the selection's direct children
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Trail {
    pub breadcrumbs: Vec<Breadcrumb>,
    pub children: Vec<Category>,
}

/// Resolve the trail for a selected category path
///
/// With no selection the trail is empty and the children are the root
/// categories. Exactly one crumb is marked active: the selection itself.
///
/// # Errors
/// Returns `CatalogError::CategoryNotFound` when `selected` names a path
/// missing from the tree.
pub fn resolve(tree: &CategoryTree, selected: Option<&str>) -> Result<Trail, CatalogError> {
    let Some(path) = selected else {
        return Ok(Trail {
            breadcrumbs: Vec::new(),
            children: tree.roots().into_iter().cloned().collect(),
        });
    };

    let breadcrumbs = tree
        .ancestor_chain(path)?
        .into_iter()
        .map(|category| Breadcrumb {
            label: category.name.clone(),
            path: category.path.clone(),
            active: category.path == path,
        })
        .collect();

    Ok(Trail {
        breadcrumbs,
        children: tree.children_of(Some(path)).into_iter().cloned().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::category;

    fn tree() -> CategoryTree {
        CategoryTree::build(vec![
            category("men"),
            category("men/shirts"),
            category("men/shirts/linen"),
            category("men/jackets"),
        ])
        .unwrap()
    }

    #[test]
    fn test_no_selection_yields_roots() {
        let trail = resolve(&tree(), None).unwrap();
        assert!(trail.breadcrumbs.is_empty());
        assert_eq!(trail.children.len(), 1);
        assert_eq!(trail.children[0].path, "men");
    }

    #[test]
    fn test_trail_is_root_first_with_last_active() {
        let trail = resolve(&tree(), Some("men/shirts/linen")).unwrap();
        let labels: Vec<_> = trail
            .breadcrumbs
            .iter()
            .map(|crumb| crumb.path.as_str())
            .collect();
        assert_eq!(labels, vec!["men", "men/shirts", "men/shirts/linen"]);

        let active: Vec<_> = trail
            .breadcrumbs
            .iter()
            .filter(|crumb| crumb.active)
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].path, "men/shirts/linen");
    }

    #[test]
    fn test_children_of_selection() {
        let trail = resolve(&tree(), Some("men/shirts")).unwrap();
        assert_eq!(trail.children.len(), 1);
        assert_eq!(trail.children[0].path, "men/shirts/linen");
    }

    #[test]
    fn test_missing_selection_fails() {
        let result = resolve(&tree(), Some("women"));
        assert_eq!(
            result.unwrap_err(),
            CatalogError::CategoryNotFound("women".to_string())
        );
    }
}
