//! Report data types.

use donatrack_shared::types::ProjectId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Sum of every donation.
    pub total_donations: Decimal,
    /// Sum of every expense.
    pub total_expenses: Decimal,
    /// Projects that have not reached their target, expired or not.
    pub active_projects: usize,
    /// Projects whose donations meet or exceed their target.
    pub completed_projects: usize,
    /// Donations per project, in project order.
    pub donations_by_project: Vec<ProjectAmount>,
    /// Expenses per project, in project order.
    pub expenses_by_project: Vec<ProjectAmount>,
}

/// Amount attributed to a single project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAmount {
    /// Project ID.
    pub project_id: ProjectId,
    /// Project name.
    pub project_name: String,
    /// Summed amount. Zero when the project has no rows.
    pub amount: Decimal,
}

/// Share of a project in a total, for pie charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectShare {
    /// Project name.
    pub project_name: String,
    /// Summed amount.
    pub amount: Decimal,
    /// Whole-number percentage of the total.
    pub percent: i32,
}

/// Financial summary for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFinancialSummary {
    /// Project ID.
    pub project_id: ProjectId,
    /// Donations credited to the project.
    pub total_donations: Decimal,
    /// Expenses charged to the project.
    pub total_expenses: Decimal,
    /// Funding progress, capped at 100.
    pub progress_percent: i32,
    /// Amount still needed to reach the target. Never negative.
    pub remaining: Decimal,
    /// Donations minus expenses. May be negative.
    pub balance: Decimal,
    /// Whole days until the target date. Never negative.
    pub days_remaining: i64,
}

impl ProjectFinancialSummary {
    /// Returns true when expenses exceed donations.
    #[must_use]
    pub fn is_loss(&self) -> bool {
        self.balance < Decimal::ZERO
    }
}

/// One bar of the project detail chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    /// Series label.
    pub name: String,
    /// Bar value.
    pub amount: Decimal,
}

/// Whether a project's deadline has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeadlineStatus {
    /// At least one day remains.
    Open,
    /// The target date is today or in the past.
    Expired,
}

/// Row of the project list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectProgressRow {
    /// Project ID.
    pub project_id: ProjectId,
    /// Project name.
    pub name: String,
    /// Target amount.
    pub target_amount: Decimal,
    /// Funding progress, capped at 100.
    pub progress_percent: i32,
    /// Whole days until the target date.
    pub days_remaining: i64,
    /// Deadline status derived from `days_remaining`.
    pub status: DeadlineStatus,
}
