//! Fundraising report generation.
//!
//! This module provides pure business logic for the derived views:
//! - Dashboard statistics
//! - Project progress and days remaining
//! - Project financial summary and chart series
//! - Project list rows

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::*;
