//! In-memory state for the portfolio site
//!
//! This module provides:
//! - The catalog of project and category records with their lifecycle
//!   operations
//! - The pure gallery view computation (filter + sort)
//! - The hard-coded seed data the site starts from

pub mod catalog;
pub mod gallery;
pub mod seed;

pub use catalog::Catalog;
pub use gallery::{GalleryQuery, SortKey};

/// Store error type
#[derive(Debug, PartialEq, Eq)]
pub enum StoreError {
    ProjectNotFound(i64),
    CategoryNotFound(i64),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::ProjectNotFound(id) => write!(f, "Project {} not found", id),
            StoreError::CategoryNotFound(id) => write!(f, "Category {} not found", id),
        }
    }
}

impl std::error::Error for StoreError {}
