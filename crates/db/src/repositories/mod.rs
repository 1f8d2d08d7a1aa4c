//! Repository abstractions for data access.
//!
//! CRUD repositories validate input before taking the store's write guard.
//! The report repository only reads.

pub mod donation;
pub mod expense;
pub mod project;
pub mod report;

pub use donation::DonationRepository;
pub use expense::ExpenseRepository;
pub use project::ProjectRepository;
pub use report::{DonationRow, ExpenseRow, ProjectReport, ReportRepository, ReportSettings};
