//! Text search over projects, donations and expenses.

pub mod filter;

pub use filter::{
    ProjectNames, TextSearchable, UNKNOWN_PROJECT, filter_by_text, resolve_project_name,
};
