//! Case-insensitive text filtering for list views.

use std::collections::HashMap;

use donatrack_shared::types::ProjectId;

use crate::model::{Donation, Expense, Project};

/// Label used for rows whose project no longer exists.
pub const UNKNOWN_PROJECT: &str = "Unknown Project";

/// Returns the name of the project with `id`, or [`UNKNOWN_PROJECT`].
#[must_use]
pub fn resolve_project_name(projects: &[Project], id: ProjectId) -> &str {
    projects
        .iter()
        .find(|project| project.id == id)
        .map_or(UNKNOWN_PROJECT, |project| project.name.as_str())
}

/// Project name lookup built once per search.
#[derive(Debug, Clone)]
pub struct ProjectNames<'a> {
    names: HashMap<ProjectId, &'a str>,
    unknown_label: &'a str,
}

impl<'a> ProjectNames<'a> {
    /// Indexes the names of `projects`.
    #[must_use]
    pub fn new(projects: &'a [Project]) -> Self {
        Self {
            names: projects
                .iter()
                .map(|project| (project.id, project.name.as_str()))
                .collect(),
            unknown_label: UNKNOWN_PROJECT,
        }
    }

    /// Overrides the label returned for dangling project IDs.
    #[must_use]
    pub const fn with_unknown_label(mut self, label: &'a str) -> Self {
        self.unknown_label = label;
        self
    }

    /// Resolves a project name, falling back to the unknown label.
    #[must_use]
    pub fn resolve(&self, id: ProjectId) -> &'a str {
        self.names.get(&id).copied().unwrap_or(self.unknown_label)
    }
}

/// An entity that can be matched by a free-text query.
pub trait TextSearchable {
    /// Text fields the query is matched against.
    fn search_fields<'a>(&'a self, names: &ProjectNames<'a>) -> Vec<&'a str>;
}

impl TextSearchable for Project {
    fn search_fields<'a>(&'a self, _names: &ProjectNames<'a>) -> Vec<&'a str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

impl TextSearchable for Donation {
    fn search_fields<'a>(&'a self, names: &ProjectNames<'a>) -> Vec<&'a str> {
        vec![self.donor_name.as_str(), names.resolve(self.project_id)]
    }
}

impl TextSearchable for Expense {
    fn search_fields<'a>(&'a self, names: &ProjectNames<'a>) -> Vec<&'a str> {
        vec![self.description.as_str(), names.resolve(self.project_id)]
    }
}

/// Keeps the items with any search field containing `query`, ignoring case.
///
/// Leading and trailing whitespace in `query` is ignored, so a pasted `"doe "`
/// still finds "John Doe". Relative order is preserved. A blank query matches
/// everything.
#[must_use]
pub fn filter_by_text<'a, T: TextSearchable>(
    items: &'a [T],
    query: &str,
    names: &ProjectNames<'a>,
) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| {
            item.search_fields(names)
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
