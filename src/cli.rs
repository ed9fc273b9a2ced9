//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for swapr using the
//! `clap` crate. Every listing view is a thin wrapper over the catalog
//! query engine: the flags on `browse`, `search`, and the `admin` queues
//! map one-to-one onto [`QueryState`](crate::catalog::QueryState) fields.
//!
//! # Commands
//!
//! - **browse**: category-driven catalog browsing with breadcrumbs (default)
//! - **search**: free-text catalog search with optional owner/sort scoping
//! - **featured** / **similar**: curated rails
//! - **categories**: the category tree with listing counts
//! - **admin**: moderation queues and review actions
//! - **catalog**: manage registered snapshot files (add, remove, list, set-default)
//! - **config**: manage persisted settings
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use swapr::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["swapr", "search", "jacket", "--status", "approved"]);
//! assert!(matches!(cli.command, Some(Commands::Search { .. })));
//! ```

use crate::catalog::{FEATURED_LIMIT, SIMILAR_LIMIT, SortOrder, StatusFilter};
use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// Rendering format for result sets
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Table,
    /// JSON array of listings
    Json,
    /// CSV rows
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Csv => "csv",
        })
    }
}

/// Which entity kind an admin review action targets
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewTarget {
    Listing,
    User,
}

/// Shared arguments for commands that read a catalog snapshot
#[derive(Parser, Debug, Clone)]
pub struct CatalogArgs {
    /// Catalog name to use (overrides default)
    #[arg(long = "catalog", value_name = "NAME")]
    pub catalog: Option<String>,
}

/// Shared pagination arguments
#[derive(Parser, Debug, Clone)]
pub struct PageArgs {
    /// Page to display (1-based)
    #[arg(short = 'p', long = "page", value_name = "N", default_value_t = 1)]
    pub page: usize,

    /// Listings per page (defaults to the configured page size)
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "swapr")]
#[command(about = "Catalog browser and moderation toolkit for a clothing exchange", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Browse the catalog by category (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Category path to browse (e.g. men/shirts)
        #[arg(short = 'c', long = "category", value_name = "PATH")]
        category: Option<String>,

        /// Free-text search within the selection
        #[arg(short = 's', long = "search", value_name = "TERM")]
        search: Option<String>,

        /// Status filter
        #[arg(long = "status", value_enum, default_value_t = StatusFilter::Approved)]
        status: StatusFilter,

        #[command(flatten)]
        page_args: PageArgs,

        #[command(flatten)]
        catalog_args: CatalogArgs,
    },

    /// Search listings across the whole catalog
    #[command(visible_alias = "s")]
    Search {
        /// Search term (matches title, owner, and category name)
        #[arg(value_name = "TERM")]
        term: Option<String>,

        /// Status filter
        #[arg(long = "status", value_enum, default_value_t = StatusFilter::Approved)]
        status: StatusFilter,

        /// Only show listings posted by this member
        #[arg(long = "owner", value_name = "NAME")]
        owner: Option<String>,

        /// Result ordering
        #[arg(long = "sort", value_enum, default_value_t = SortOrder::Feed)]
        sort: SortOrder,

        /// Output format
        #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        #[command(flatten)]
        page_args: PageArgs,

        #[command(flatten)]
        catalog_args: CatalogArgs,
    },

    /// Show the featured rail
    Featured {
        /// Maximum number of listings to show
        #[arg(short = 'n', long = "limit", default_value_t = FEATURED_LIMIT)]
        limit: usize,

        #[command(flatten)]
        catalog_args: CatalogArgs,
    },

    /// Show listings similar to a given one
    Similar {
        /// Listing id to find matches for
        #[arg(value_name = "LISTING_ID")]
        id: String,

        /// Maximum number of listings to show
        #[arg(short = 'n', long = "limit", default_value_t = SIMILAR_LIMIT)]
        limit: usize,

        #[command(flatten)]
        catalog_args: CatalogArgs,
    },

    /// Show the category tree with listing counts
    #[command(visible_alias = "cat")]
    Categories {
        #[command(flatten)]
        catalog_args: CatalogArgs,
    },

    /// Moderation queues and review actions
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },

    /// Manage catalog snapshots
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Moderation subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum AdminCommands {
    /// List member accounts with search and status filtering
    Users {
        /// Search by username or email
        #[arg(value_name = "TERM")]
        search: Option<String>,

        /// Status filter
        #[arg(long = "status", value_enum, default_value_t = StatusFilter::All)]
        status: StatusFilter,

        #[command(flatten)]
        page_args: PageArgs,

        #[command(flatten)]
        catalog_args: CatalogArgs,
    },

    /// List listings with search and status filtering
    Listings {
        /// Search by title, owner, or category name
        #[arg(value_name = "TERM")]
        search: Option<String>,

        /// Status filter
        #[arg(long = "status", value_enum, default_value_t = StatusFilter::All)]
        status: StatusFilter,

        /// Restrict to a category path
        #[arg(short = 'c', long = "category", value_name = "PATH")]
        category: Option<String>,

        #[command(flatten)]
        page_args: PageArgs,

        #[command(flatten)]
        catalog_args: CatalogArgs,
    },

    /// Approve a pending listing or user
    Approve {
        /// What to approve
        #[arg(value_enum)]
        target: ReviewTarget,

        /// Id of the listing or user
        id: String,

        #[command(flatten)]
        catalog_args: CatalogArgs,
    },

    /// Reject a pending listing or user
    Reject {
        /// What to reject
        #[arg(value_enum)]
        target: ReviewTarget,

        /// Id of the listing or user
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'f', long = "force")]
        force: bool,

        #[command(flatten)]
        catalog_args: CatalogArgs,
    },

    /// Put an approved listing on the featured rail
    Feature {
        /// Listing id
        id: String,

        #[command(flatten)]
        catalog_args: CatalogArgs,
    },

    /// Take a listing off the featured rail
    Unfeature {
        /// Listing id
        id: String,

        #[command(flatten)]
        catalog_args: CatalogArgs,
    },
}

/// Catalog snapshot management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum CatalogCommands {
    /// Register a catalog snapshot file
    Add {
        /// Name of the catalog
        name: String,

        /// Path to the snapshot JSON file
        path: PathBuf,

        /// Seed the snapshot with sample data if it does not exist
        #[arg(long = "sample")]
        sample: bool,
    },

    /// List all registered catalogs
    List,

    /// Remove a catalog from configuration
    #[command(visible_alias = "rm")]
    Remove {
        /// Name of the catalog to remove
        name: String,

        /// Also delete the snapshot file from disk
        #[arg(short = 'd', long = "delete-file")]
        delete_file: bool,
    },

    /// Set the default catalog
    #[command(name = "set-default")]
    SetDefault {
        /// Name of the catalog to set as default
        name: String,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g. quiet=true, page_size=20)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g. quiet)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

impl Commands {
    /// Helper method to get the catalog name override from commands
    #[must_use]
    pub fn catalog_name(&self) -> Option<String> {
        match self {
            Self::Browse { catalog_args, .. }
            | Self::Search { catalog_args, .. }
            | Self::Featured { catalog_args, .. }
            | Self::Similar { catalog_args, .. }
            | Self::Categories { catalog_args } => catalog_args.catalog.clone(),
            Self::Admin { command } => command.catalog_name(),
            Self::Catalog { .. } | Self::Config { .. } => None,
        }
    }

    /// Whether this command mutates the snapshot and needs to write it back
    #[must_use]
    pub const fn mutates_snapshot(&self) -> bool {
        matches!(
            self,
            Self::Admin {
                command: AdminCommands::Approve { .. }
                    | AdminCommands::Reject { .. }
                    | AdminCommands::Feature { .. }
                    | AdminCommands::Unfeature { .. }
            }
        )
    }
}

impl AdminCommands {
    /// Helper method to get the catalog name override from admin commands
    #[must_use]
    pub fn catalog_name(&self) -> Option<String> {
        match self {
            Self::Users { catalog_args, .. }
            | Self::Listings { catalog_args, .. }
            | Self::Approve { catalog_args, .. }
            | Self::Reject { catalog_args, .. }
            | Self::Feature { catalog_args, .. }
            | Self::Unfeature { catalog_args, .. } => catalog_args.catalog.clone(),
        }
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            category: None,
            search: None,
            status: StatusFilter::Approved,
            page_args: PageArgs {
                page: 1,
                page_size: None,
            },
            catalog_args: CatalogArgs { catalog: None },
        })
    }
}
