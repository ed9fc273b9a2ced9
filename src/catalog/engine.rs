//! Query state and the catalog query engine
//!
//! The engine is the single entry point the listing views share: category
//! browser, home grid, member dashboard, and the admin moderation queue all
//! express their render as one [`QueryState`] and receive one
//! [`QueryResult`]. Every call recomputes from the supplied collections —
//! the engine owns no data beyond the category index and caches nothing, so
//! identical inputs always produce identical results.
//!
//! [`QueryState`] is immutable. Each user interaction produces a new state
//! via the `with_*` methods; every filter transition resets the page to 1,
//! so a stale page number on a shrunk result set cannot survive a filter
//! change. Only [`QueryState::with_page`] keeps the rest of the state.

use super::breadcrumb::{self, Breadcrumb};
use super::error::CatalogError;
use super::filter::{ListingFilterExt, ListingSearch, StatusFilter, UserSearch, filter_users};
use super::paginate::{Paged, paginate};
use super::tree::CategoryTree;
use crate::models::{Category, Listing, User};
use clap::ValueEnum;
use std::fmt;

/// Page size used when the caller does not specify one
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Result ordering applied after filtering, before pagination
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Keep the order the collection was supplied in
    #[default]
    Feed,
    /// Most recently listed first (stable for equal timestamps)
    Newest,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Feed => "feed",
            Self::Newest => "newest",
        })
    }
}

/// Immutable snapshot of the filter/search/page parameters for one render
///
/// Constructed fresh per interaction; the `with_*` transitions return a new
/// state rather than mutating, so a query result is always a pure function
/// of a state value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    search_term: String,
    status: StatusFilter,
    category: Option<String>,
    owner: Option<String>,
    sort: SortOrder,
    page: usize,
    page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryState {
    /// Initial state: no term, all statuses, no category, page 1
    #[must_use]
    pub fn new() -> Self {
        Self {
            search_term: String::new(),
            status: StatusFilter::All,
            category: None,
            owner: None,
            sort: SortOrder::Feed,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Current free-text search term
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Current status filter
    #[must_use]
    pub const fn status(&self) -> StatusFilter {
        self.status
    }

    /// Currently selected category path, if any
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Current owner scope, if any
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Current sort order
    #[must_use]
    pub const fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Requested page (1-based)
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Requested page size
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// New state with a different search term; resets to page 1
    #[must_use]
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self.page = 1;
        self
    }

    /// New state with a different status filter; resets to page 1
    #[must_use]
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self.page = 1;
        self
    }

    /// New state with a different category selection; resets to page 1
    #[must_use]
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self.page = 1;
        self
    }

    /// New state scoped to a single owner's listings; resets to page 1
    #[must_use]
    pub fn with_owner(mut self, owner: Option<String>) -> Self {
        self.owner = owner;
        self.page = 1;
        self
    }

    /// New state with a different sort order; resets to page 1
    #[must_use]
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self.page = 1;
        self
    }

    /// New state with a different page size; resets to page 1
    ///
    /// A page size of zero is coerced to 1.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self.page = 1;
        self
    }

    /// New state on a different page; all filters are kept
    #[must_use]
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}

/// One rendered catalog page: the listing slice, pagination metadata, and
/// the navigation trail for the selected category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    /// The page slice, in result order
    pub items: Vec<Listing>,
    /// Matching listings before pagination
    pub total_count: usize,
    /// Total pages, at least 1
    pub total_pages: usize,
    /// The page actually served (after clamping)
    pub page: usize,
    /// Root-to-selection trail; empty when no category is selected
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Direct children of the selection (or the roots)
    pub children: Vec<Category>,
}

/// Stateless query engine over a category snapshot
///
/// Holds the category index (built once per snapshot) and the search-field
/// configuration; the listing collection is passed into every call so the
/// engine never holds stale data.
#[derive(Debug, Clone)]
pub struct CatalogQueryEngine {
    tree: CategoryTree,
    search: ListingSearch,
}

impl CatalogQueryEngine {
    /// Build an engine for a category snapshot
    ///
    /// # Errors
    /// Returns `CatalogError::MalformedTree` when the category collection
    /// has duplicate paths, dangling parents, or cycles.
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        Ok(Self {
            tree: CategoryTree::build(categories)?,
            search: ListingSearch::default(),
        })
    }

    /// Replace the search-field configuration
    #[must_use]
    pub fn with_search(mut self, search: ListingSearch) -> Self {
        self.search = search;
        self
    }

    /// The category index backing this engine
    #[must_use]
    pub const fn tree(&self) -> &CategoryTree {
        &self.tree
    }

    /// Run one query: resolve the trail, filter, sort, and paginate
    ///
    /// The category, owner, search, and status predicates are AND'd; input
    /// order is preserved unless the state requests `SortOrder::Newest`.
    ///
    /// # Errors
    /// Returns `CatalogError::CategoryNotFound` when the state selects a
    /// category missing from the snapshot. The caller decides whether to
    /// clear the selection and retry; nothing is silently substituted.
    pub fn query(
        &self,
        listings: &[Listing],
        state: &QueryState,
    ) -> Result<QueryResult, CatalogError> {
        let trail = breadcrumb::resolve(&self.tree, state.category())?;

        let mut matched = listings
            .iter()
            .in_category(state.category())
            .owned_by(state.owner())
            .matching(state.search_term(), &self.search, &self.tree)
            .with_status(state.status());

        if state.sort() == SortOrder::Newest {
            matched.sort_by(|a, b| b.listed_at.cmp(&a.listed_at));
        }

        let owned: Vec<Listing> = matched.into_iter().cloned().collect();
        let paged = paginate(owned, state.page(), state.page_size());

        Ok(QueryResult {
            items: paged.items,
            total_count: paged.total_count,
            total_pages: paged.total_pages,
            page: paged.page,
            breadcrumbs: trail.breadcrumbs,
            children: trail.children,
        })
    }
}

/// Admin-variant engine over the user directory
///
/// Same search/status/paginate pipeline as the catalog engine, minus
/// categories and breadcrumbs.
#[derive(Debug, Clone, Default)]
pub struct UserQueryEngine {
    search: UserSearch,
}

impl UserQueryEngine {
    /// Engine with the default field configuration (username, email)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search-field configuration
    #[must_use]
    pub fn with_search(mut self, search: UserSearch) -> Self {
        self.search = search;
        self
    }

    /// Filter, sort, and paginate the user directory
    ///
    /// `SortOrder::Newest` orders by registration time. The state's
    /// category and owner scopes do not apply to users and are ignored.
    #[must_use]
    pub fn query(&self, users: &[User], state: &QueryState) -> Paged<User> {
        let mut matched = filter_users(users, state.search_term(), state.status(), &self.search);

        if state.sort() == SortOrder::Newest {
            matched.sort_by(|a, b| b.registered_at.cmp(&a.registered_at));
        }

        let owned: Vec<User> = matched.into_iter().cloned().collect();
        paginate(owned, state.page(), state.page_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{category, listing, listed_days_ago, user};

    fn engine() -> CatalogQueryEngine {
        CatalogQueryEngine::new(vec![
            category("men"),
            category("men/shirts"),
            category("men/jackets"),
        ])
        .unwrap()
    }

    fn sample_listings() -> Vec<Listing> {
        use crate::models::ModerationStatus::{Approved, Pending};
        vec![
            listing("Linen Shirt", "men/shirts", Approved),
            listing("Blue Denim Jacket", "men/jackets", Approved),
            listing("Flannel Shirt", "men/shirts", Pending),
            listing("Rain Jacket", "men/jackets", Pending),
        ]
    }

    #[test]
    fn test_category_selection_scopes_results() {
        let engine = engine();
        let listings = sample_listings();
        let state = QueryState::new().with_category(Some("men/shirts".to_string()));

        let result = engine.query(&listings, &state).unwrap();
        assert_eq!(result.total_count, 2);
        assert!(result.items.iter().all(|l| l.category == "men/shirts"));
        assert_eq!(result.breadcrumbs.len(), 2);
        assert!(result.breadcrumbs[1].active);
    }

    #[test]
    fn test_missing_category_is_an_error() {
        let engine = engine();
        let listings = sample_listings();
        let state = QueryState::new().with_category(Some("nonexistent".to_string()));

        let result = engine.query(&listings, &state);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::CategoryNotFound("nonexistent".to_string())
        );
    }

    #[test]
    fn test_query_is_pure() {
        let engine = engine();
        let listings = sample_listings();
        let state = QueryState::new()
            .with_search_term("shirt")
            .with_status(StatusFilter::Approved);

        let first = engine.query(&listings, &state).unwrap();
        let second = engine.query(&listings, &state).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_filter_transitions_reset_page() {
        let state = QueryState::new().with_page(3);
        assert_eq!(state.page(), 3);

        assert_eq!(state.clone().with_search_term("jacket").page(), 1);
        assert_eq!(state.clone().with_status(StatusFilter::Pending).page(), 1);
        assert_eq!(state.clone().with_category(None).page(), 1);
        assert_eq!(state.clone().with_owner(None).page(), 1);
        assert_eq!(state.clone().with_sort(SortOrder::Newest).page(), 1);
        assert_eq!(state.clone().with_page_size(5).page(), 1);
        assert_eq!(state.with_page(2).page(), 2);
    }

    #[test]
    fn test_narrowing_status_never_increases_total() {
        let engine = engine();
        let listings = sample_listings();

        let all = engine
            .query(&listings, &QueryState::new())
            .unwrap()
            .total_count;

        for status in [
            StatusFilter::Pending,
            StatusFilter::Approved,
            StatusFilter::Rejected,
        ] {
            let narrowed = engine
                .query(&listings, &QueryState::new().with_status(status))
                .unwrap()
                .total_count;
            assert!(narrowed <= all);
        }
    }

    #[test]
    fn test_owner_scope() {
        use crate::models::ModerationStatus::Approved;
        let engine = engine();
        let mut listings = sample_listings();
        listings[0].owner = "priya".to_string();
        listings.push({
            let mut extra = listing("Silk Shirt", "men/shirts", Approved);
            extra.owner = "priya".to_string();
            extra
        });

        let state = QueryState::new().with_owner(Some("priya".to_string()));
        let result = engine.query(&listings, &state).unwrap();
        assert_eq!(result.total_count, 2);
        assert!(result.items.iter().all(|l| l.owner == "priya"));
    }

    #[test]
    fn test_newest_sort_orders_by_listed_at() {
        use crate::models::ModerationStatus::Approved;
        let engine = engine();
        let listings = vec![
            listed_days_ago(listing("Old Shirt", "men/shirts", Approved), 30),
            listed_days_ago(listing("New Shirt", "men/shirts", Approved), 1),
            listed_days_ago(listing("Mid Shirt", "men/shirts", Approved), 10),
        ];

        let feed = engine.query(&listings, &QueryState::new()).unwrap();
        let feed_titles: Vec<_> = feed.items.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(feed_titles, vec!["Old Shirt", "New Shirt", "Mid Shirt"]);

        let newest = engine
            .query(&listings, &QueryState::new().with_sort(SortOrder::Newest))
            .unwrap();
        let newest_titles: Vec<_> = newest.items.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(newest_titles, vec!["New Shirt", "Mid Shirt", "Old Shirt"]);
    }

    #[test]
    fn test_stale_page_is_clamped_not_served() {
        let engine = engine();
        let listings = sample_listings();
        let state = QueryState::new().with_page_size(2).with_page(9);

        let result = engine.query(&listings, &state).unwrap();
        assert_eq!(result.total_pages, 2);
        assert_eq!(result.page, 2);
    }

    #[test]
    fn test_user_engine_pipeline() {
        use crate::models::ModerationStatus::{Approved, Pending};
        let engine = UserQueryEngine::new();
        let users = vec![
            user("priya", Approved),
            user("marco", Pending),
            user("mariana", Pending),
        ];

        let state = QueryState::new()
            .with_search_term("mar")
            .with_status(StatusFilter::Pending)
            .with_page_size(1);

        let paged = engine.query(&users, &state);
        assert_eq!(paged.total_count, 2);
        assert_eq!(paged.total_pages, 2);
        assert_eq!(paged.items[0].username, "marco");
    }
}
