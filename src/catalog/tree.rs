//! Category hierarchy index
//!
//! The source of truth for categories is a flat collection supplied by the
//! data-fetch layer; this module builds an explicit index over it once per
//! snapshot instead of re-scanning the collection on every render. The tree
//! is immutable: when a new category snapshot arrives, a new tree is built.
//!
//! Construction validates the collection up front: duplicate paths,
//! parents that do not resolve to an existing category, and cycles in the
//! parent links all fail with a [`TreeError`] rather than producing a tree
//! that answers queries inconsistently.

use super::error::{CatalogError, TreeError};
use crate::models::Category;
use std::collections::HashMap;

/// Immutable parent/child index over a category snapshot
///
/// Categories keep their input order; `children_of` and `roots` return
/// them filtered, not re-sorted.
#[derive(Debug, Clone)]
pub struct CategoryTree {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
}

impl CategoryTree {
    /// Build a tree from a flat category collection
    ///
    /// # Errors
    /// Returns `TreeError::DuplicatePath` if two categories share a path,
    /// `TreeError::DanglingParent` if a parent reference does not resolve,
    /// or `TreeError::Cycle` if following parent links revisits a category.
    pub fn build(categories: Vec<Category>) -> Result<Self, TreeError> {
        let mut index = HashMap::with_capacity(categories.len());

        for (position, category) in categories.iter().enumerate() {
            if index.insert(category.path.clone(), position).is_some() {
                return Err(TreeError::DuplicatePath(category.path.clone()));
            }
        }

        for category in &categories {
            if let Some(parent) = &category.parent
                && !index.contains_key(parent)
            {
                return Err(TreeError::DanglingParent {
                    path: category.path.clone(),
                    parent: parent.clone(),
                });
            }
        }

        // Every parent link resolves at this point, so a walk that takes
        // more steps than there are categories must be revisiting one.
        for category in &categories {
            let mut steps = 0;
            let mut current = category;
            while let Some(parent) = &current.parent {
                steps += 1;
                if steps > categories.len() {
                    return Err(TreeError::Cycle(category.path.clone()));
                }
                current = &categories[index[parent]];
            }
        }

        Ok(Self { categories, index })
    }

    /// Look up a category by path
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Category> {
        self.index.get(path).map(|&position| &self.categories[position])
    }

    /// Whether a category with the given path exists
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    /// Direct children of `parent`, or the root categories when `None`
    ///
    /// Input order is preserved.
    #[must_use]
    pub fn children_of(&self, parent: Option<&str>) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|category| category.parent.as_deref() == parent)
            .collect()
    }

    /// Root categories (those with no parent), in input order
    #[must_use]
    pub fn roots(&self) -> Vec<&Category> {
        self.children_of(None)
    }

    /// Chain of categories from the root down to `path` (inclusive)
    ///
    /// # Errors
    /// Returns `CatalogError::CategoryNotFound` if `path` does not exist.
    pub fn ancestor_chain(&self, path: &str) -> Result<Vec<&Category>, CatalogError> {
        let mut chain = Vec::new();
        let mut current = self
            .get(path)
            .ok_or_else(|| CatalogError::CategoryNotFound(path.to_string()))?;

        chain.push(current);
        while let Some(parent) = &current.parent {
            // Parent links were validated at build time.
            current = &self.categories[self.index[parent]];
            chain.push(current);
        }

        chain.reverse();
        Ok(chain)
    }

    /// Number of categories in the tree
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the tree holds no categories
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate over all categories in input order
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::category;

    fn sample_tree() -> CategoryTree {
        CategoryTree::build(vec![
            category("men"),
            category("women"),
            category("men/shirts"),
            category("men/jackets"),
            category("women/dresses"),
        ])
        .unwrap()
    }

    #[test]
    fn test_roots_preserve_input_order() {
        let tree = sample_tree();
        let roots: Vec<_> = tree.roots().iter().map(|c| c.path.as_str()).collect();
        assert_eq!(roots, vec!["men", "women"]);
    }

    #[test]
    fn test_children_of_path() {
        let tree = sample_tree();
        let children: Vec<_> = tree
            .children_of(Some("men"))
            .iter()
            .map(|c| c.path.as_str())
            .collect();
        assert_eq!(children, vec!["men/shirts", "men/jackets"]);

        assert!(tree.children_of(Some("men/shirts")).is_empty());
    }

    #[test]
    fn test_ancestor_chain_root_first() {
        let tree = sample_tree();
        let chain: Vec<_> = tree
            .ancestor_chain("men/shirts")
            .unwrap()
            .iter()
            .map(|c| c.path.as_str())
            .collect();
        assert_eq!(chain, vec!["men", "men/shirts"]);
    }

    #[test]
    fn test_ancestor_chain_of_root() {
        let tree = sample_tree();
        let chain = tree.ancestor_chain("women").unwrap();
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].path, "women");
    }

    #[test]
    fn test_ancestor_chain_missing_path() {
        let tree = sample_tree();
        let result = tree.ancestor_chain("kids");
        assert_eq!(
            result.unwrap_err(),
            CatalogError::CategoryNotFound("kids".to_string())
        );
    }

    #[test]
    fn test_build_rejects_duplicate_path() {
        let result = CategoryTree::build(vec![category("men"), category("men")]);
        assert_eq!(result.unwrap_err(), TreeError::DuplicatePath("men".to_string()));
    }

    #[test]
    fn test_build_rejects_dangling_parent() {
        let result = CategoryTree::build(vec![category("men/shirts")]);
        assert_eq!(
            result.unwrap_err(),
            TreeError::DanglingParent {
                path: "men/shirts".to_string(),
                parent: "men".to_string(),
            }
        );
    }

    #[test]
    fn test_build_rejects_cycle() {
        let mut a = category("a");
        a.parent = Some("b".to_string());
        let mut b = category("b");
        b.parent = Some("a".to_string());

        let result = CategoryTree::build(vec![a, b]);
        assert!(matches!(result.unwrap_err(), TreeError::Cycle(_)));
    }

    #[test]
    fn test_empty_tree() {
        let tree = CategoryTree::build(Vec::new()).unwrap();
        assert!(tree.is_empty());
        assert!(tree.roots().is_empty());
    }
}
