//! In-memory data store with repositories.
//!
//! This crate provides:
//! - `InMemoryStore`, a keyed store that serializes writes
//! - The `DataStore` read contract consumed by reporting
//! - Repository abstractions for create/update/delete
//! - Demo fixtures for development

pub mod error;
pub mod fixtures;
pub mod repositories;
pub mod store;

pub use error::StoreError;
pub use repositories::{
    DonationRepository, ExpenseRepository, ProjectRepository, ReportRepository, ReportSettings,
};
pub use store::{DataStore, InMemoryStore, Snapshot};
