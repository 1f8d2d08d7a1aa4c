//! Report repository.
//!
//! Every report reads one [`Snapshot`](crate::store::Snapshot) of the store and
//! hands it to the pure functions in `donatrack_core::reports`.

use chrono::{DateTime, Utc};
use donatrack_core::model::{Donation, Expense, Project};
use donatrack_core::reports::service::DEFAULT_RECENT_DONATIONS;
use donatrack_core::reports::{
    ChartPoint, DashboardStats, ProjectFinancialSummary, ProjectProgressRow, ProjectShare,
    ReportService,
};
use donatrack_core::search::{ProjectNames, UNKNOWN_PROJECT, filter_by_text};
use donatrack_shared::config::ReportingConfig;
use donatrack_shared::types::ProjectId;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::store::{DataStore, InMemoryStore};

/// Presentation settings applied to reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    /// Label for rows whose project no longer exists.
    pub unknown_project_label: String,
    /// Number of donations shown on a project page.
    pub recent_donations_limit: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            unknown_project_label: UNKNOWN_PROJECT.to_string(),
            recent_donations_limit: DEFAULT_RECENT_DONATIONS,
        }
    }
}

impl ReportSettings {
    /// Builds settings from the reporting configuration section.
    #[must_use]
    pub fn from_config(config: &ReportingConfig) -> Self {
        Self {
            unknown_project_label: config.unknown_project_label.clone(),
            recent_donations_limit: config.recent_donations_limit,
        }
    }
}

/// Everything shown on a project detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReport {
    /// The project.
    pub project: Project,
    /// Financial summary at the requested instant.
    pub summary: ProjectFinancialSummary,
    /// Bar chart series.
    pub chart: Vec<ChartPoint>,
    /// Latest donations in stored order, capped by the configured limit.
    pub recent_donations: Vec<Donation>,
    /// All expenses charged to the project.
    pub expenses: Vec<Expense>,
}

/// Donation row with its resolved project name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRow {
    /// The donation.
    #[serde(flatten)]
    pub donation: Donation,
    /// Project name or the unknown-project label.
    pub project_name: String,
}

/// Expense row with its resolved project name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRow {
    /// The expense.
    #[serde(flatten)]
    pub expense: Expense,
    /// Project name or the unknown-project label.
    pub project_name: String,
}

/// Report repository over any [`DataStore`].
#[derive(Debug, Clone)]
pub struct ReportRepository<S = InMemoryStore> {
    store: S,
    settings: ReportSettings,
}

impl<S: DataStore> ReportRepository<S> {
    /// Creates a new report repository with default settings.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_settings(store, ReportSettings::default())
    }

    /// Creates a new report repository with explicit settings.
    #[must_use]
    pub const fn with_settings(store: S, settings: ReportSettings) -> Self {
        Self { store, settings }
    }

    /// Settings in use.
    #[must_use]
    pub const fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Computes the dashboard aggregates.
    pub async fn dashboard_stats(&self) -> DashboardStats {
        let snapshot = self.store.snapshot().await;
        let stats = ReportService::compute_dashboard_stats(
            &snapshot.projects,
            &snapshot.donations,
            &snapshot.expenses,
        );

        debug!(
            total_donations = %stats.total_donations,
            total_expenses = %stats.total_expenses,
            completed = stats.completed_projects,
            active = stats.active_projects,
            "Dashboard stats computed"
        );
        stats
    }

    /// Share of total donations per project.
    pub async fn donation_shares(&self) -> Vec<ProjectShare> {
        ReportService::donation_share_by_project(&self.dashboard_stats().await)
    }

    /// Builds the detail report of one project.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ProjectNotFound` if the project does not exist.
    pub async fn project_summary(
        &self,
        id: ProjectId,
        now: DateTime<Utc>,
    ) -> Result<ProjectReport, StoreError> {
        let snapshot = self.store.snapshot().await;
        let Some(project) = snapshot.projects.iter().find(|p| p.id == id).cloned() else {
            warn!(project_id = %id, "Report requested for unknown project");
            return Err(StoreError::ProjectNotFound(id));
        };

        let summary = ReportService::compute_project_financial_summary(
            &project,
            &snapshot.donations,
            &snapshot.expenses,
            now,
        );
        let chart = ReportService::project_chart_data(&project, &summary);
        let recent_donations = ReportService::recent_donations(
            &snapshot.donations,
            id,
            self.settings.recent_donations_limit,
        )
        .into_iter()
        .cloned()
        .collect();
        let expenses = snapshot
            .expenses
            .iter()
            .filter(|expense| expense.project_id == id)
            .cloned()
            .collect();

        debug!(
            project_id = %id,
            progress = summary.progress_percent,
            days_remaining = summary.days_remaining,
            "Project summary computed"
        );

        Ok(ProjectReport {
            project,
            summary,
            chart,
            recent_donations,
            expenses,
        })
    }

    /// Progress rows for the project list.
    pub async fn project_progress(&self, now: DateTime<Utc>) -> Vec<ProjectProgressRow> {
        let snapshot = self.store.snapshot().await;
        ReportService::project_progress_rows(&snapshot.projects, &snapshot.donations, now)
    }

    /// Projects whose name or description contains `query`.
    pub async fn search_projects(&self, query: &str) -> Vec<Project> {
        let snapshot = self.store.snapshot().await;
        let names = self.project_names(&snapshot.projects);
        filter_by_text(&snapshot.projects, query, &names)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Donations whose donor or project name contains `query`.
    pub async fn search_donations(&self, query: &str) -> Vec<DonationRow> {
        let snapshot = self.store.snapshot().await;
        let names = self.project_names(&snapshot.projects);
        filter_by_text(&snapshot.donations, query, &names)
            .into_iter()
            .map(|donation| DonationRow {
                project_name: names.resolve(donation.project_id).to_string(),
                donation: donation.clone(),
            })
            .collect()
    }

    /// Expenses whose description or project name contains `query`.
    pub async fn search_expenses(&self, query: &str) -> Vec<ExpenseRow> {
        let snapshot = self.store.snapshot().await;
        let names = self.project_names(&snapshot.projects);
        filter_by_text(&snapshot.expenses, query, &names)
            .into_iter()
            .map(|expense| ExpenseRow {
                project_name: names.resolve(expense.project_id).to_string(),
                expense: expense.clone(),
            })
            .collect()
    }

    fn project_names<'a>(&'a self, projects: &'a [Project]) -> ProjectNames<'a> {
        ProjectNames::new(projects).with_unknown_label(&self.settings.unknown_project_label)
    }
}
