//! Core business logic for Donatrack.
//!
//! This crate contains pure business logic with ZERO storage or web dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `model` - Projects, donations, expenses and their input validation
//! - `reports` - Dashboard statistics and per-project financial summaries
//! - `search` - Case-insensitive text filtering and project name resolution

pub mod model;
pub mod reports;
pub mod search;
