//! Catalog query engine
//!
//! The single home for the view-state logic the exchange's listing pages
//! share: hierarchical category resolution, free-text + status filtering,
//! deterministic pagination, and breadcrumb derivation, orchestrated by
//! [`CatalogQueryEngine::query`]. Everything here is a pure function of the
//! supplied collections — no I/O, no caching, no mutation of inputs.

pub mod breadcrumb;
pub mod engine;
pub mod error;
pub mod filter;
pub mod paginate;
pub mod related;
pub mod tree;

pub use breadcrumb::{Breadcrumb, Trail, resolve};
pub use engine::{
    CatalogQueryEngine, DEFAULT_PAGE_SIZE, QueryResult, QueryState, SortOrder, UserQueryEngine,
};
pub use error::{CatalogError, TreeError};
pub use filter::{
    ListingField, ListingFilterExt, ListingSearch, StatusFilter, UserField, UserSearch,
    filter_users,
};
pub use paginate::{PageToken, Paged, page_window, paginate, total_pages};
pub use related::{FEATURED_LIMIT, SIMILAR_LIMIT, featured, similar};
pub use tree::CategoryTree;
