//! Swapr - catalog browsing and moderation for a clothing exchange
//!
//! This library consolidates the listing views of a peer-to-peer clothing
//! exchange — category browser, search grid, member dashboard, and admin
//! moderation queue — onto one stateless query engine. Collections are
//! supplied as plain in-memory snapshots; every query is a pure function
//! of `(categories, listings, state)`.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod moderation;
pub mod output;
pub mod store;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum SwaprError {
    /// Catalog query error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Moderation rule violation
    #[error("Moderation error: {0}")]
    ModerationError(#[from] moderation::ModerationError),
    /// Snapshot load/save error
    #[error("Store error: {0}")]
    StoreError(#[from] store::StoreError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON output error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// CSV output error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
