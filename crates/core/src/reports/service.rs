//! Report generation service.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use donatrack_shared::types::ProjectId;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::types::{
    ChartPoint, DashboardStats, DeadlineStatus, ProjectAmount, ProjectFinancialSummary,
    ProjectProgressRow, ProjectShare,
};
use crate::model::{Donation, Expense, Project, ProjectLine};

/// Number of donations shown in a project's recent donations list.
pub const DEFAULT_RECENT_DONATIONS: usize = 5;

/// Service for deriving fundraising reports.
///
/// Every function is pure: it reads the slices it is given and recomputes
/// from scratch. Dangling `project_id`s are tolerated everywhere.
pub struct ReportService;

impl ReportService {
    /// Computes the dashboard statistics.
    ///
    /// Per-project breakdowns follow the order of `projects` and include
    /// projects without any rows.
    #[must_use]
    pub fn compute_dashboard_stats(
        projects: &[Project],
        donations: &[Donation],
        expenses: &[Expense],
    ) -> DashboardStats {
        let raised = Self::totals_by_project(donations);
        let spent = Self::totals_by_project(expenses);
        let amount_for = |totals: &HashMap<ProjectId, Decimal>, id: ProjectId| {
            totals.get(&id).copied().unwrap_or(Decimal::ZERO)
        };

        let completed_projects = projects
            .iter()
            .filter(|project| amount_for(&raised, project.id) >= project.target_amount)
            .count();

        let breakdown = |totals: &HashMap<ProjectId, Decimal>| {
            projects
                .iter()
                .map(|project| ProjectAmount {
                    project_id: project.id,
                    project_name: project.name.clone(),
                    amount: amount_for(totals, project.id),
                })
                .collect::<Vec<_>>()
        };

        DashboardStats {
            total_donations: donations.iter().map(|d| d.amount).sum(),
            total_expenses: expenses.iter().map(|e| e.amount).sum(),
            active_projects: projects.len() - completed_projects,
            completed_projects,
            donations_by_project: breakdown(&raised),
            expenses_by_project: breakdown(&spent),
        }
    }

    /// Computes the funding progress of a project as a whole percentage.
    ///
    /// The ratio is rounded half away from zero and capped at 100.
    /// `target_amount` must be positive.
    #[must_use]
    pub fn compute_project_progress_percent(
        project_id: ProjectId,
        target_amount: Decimal,
        donations: &[Donation],
    ) -> i32 {
        let raised = Self::total_for_project(donations, project_id);
        Self::progress_percent(raised, target_amount)
    }

    /// Computes the whole days left until `target_date`, never negative.
    ///
    /// The target date counts from midnight UTC, so a deadline later today
    /// or already passed yields 0.
    #[must_use]
    pub fn compute_days_remaining(target_date: NaiveDate, now: DateTime<Utc>) -> i64 {
        let deadline = Utc.from_utc_datetime(&target_date.and_time(NaiveTime::MIN));
        let left = deadline - now;
        if left <= Duration::zero() {
            return 0;
        }

        let whole_days = left.num_days();
        if left > Duration::days(whole_days) {
            whole_days + 1
        } else {
            whole_days
        }
    }

    /// Computes the financial summary of a single project.
    #[must_use]
    pub fn compute_project_financial_summary(
        project: &Project,
        donations: &[Donation],
        expenses: &[Expense],
        now: DateTime<Utc>,
    ) -> ProjectFinancialSummary {
        let total_donations = Self::total_for_project(donations, project.id);
        let total_expenses = Self::total_for_project(expenses, project.id);

        ProjectFinancialSummary {
            project_id: project.id,
            total_donations,
            total_expenses,
            progress_percent: Self::progress_percent(total_donations, project.target_amount),
            remaining: (project.target_amount - total_donations).max(Decimal::ZERO),
            balance: total_donations - total_expenses,
            days_remaining: Self::compute_days_remaining(project.target_date, now),
        }
    }

    /// Builds the project detail chart: donations, expenses, balance and target.
    #[must_use]
    pub fn project_chart_data(
        project: &Project,
        summary: &ProjectFinancialSummary,
    ) -> Vec<ChartPoint> {
        [
            ("Donations", summary.total_donations),
            ("Expenses", summary.total_expenses),
            ("Balance", summary.balance),
            ("Target", project.target_amount),
        ]
        .into_iter()
        .map(|(name, amount)| ChartPoint {
            name: name.to_string(),
            amount,
        })
        .collect()
    }

    /// Returns the first `limit` donations of a project, in stored order.
    #[must_use]
    pub fn recent_donations(
        donations: &[Donation],
        project_id: ProjectId,
        limit: usize,
    ) -> Vec<&Donation> {
        donations
            .iter()
            .filter(|donation| donation.project_id == project_id)
            .take(limit)
            .collect()
    }

    /// Builds one list row per project with progress and deadline status.
    #[must_use]
    pub fn project_progress_rows(
        projects: &[Project],
        donations: &[Donation],
        now: DateTime<Utc>,
    ) -> Vec<ProjectProgressRow> {
        let raised = Self::totals_by_project(donations);

        projects
            .iter()
            .map(|project| {
                let total = raised.get(&project.id).copied().unwrap_or(Decimal::ZERO);
                let days_remaining = Self::compute_days_remaining(project.target_date, now);
                ProjectProgressRow {
                    project_id: project.id,
                    name: project.name.clone(),
                    target_amount: project.target_amount,
                    progress_percent: Self::progress_percent(total, project.target_amount),
                    days_remaining,
                    status: if days_remaining > 0 {
                        DeadlineStatus::Open
                    } else {
                        DeadlineStatus::Expired
                    },
                }
            })
            .collect()
    }

    /// Computes each project's share of the donations credited to existing
    /// projects.
    ///
    /// Donations to deleted projects are left out of the denominator, so the
    /// shares add up to 100 (give or take rounding). Shares are 0 when nothing
    /// has been donated yet.
    #[must_use]
    pub fn donation_share_by_project(stats: &DashboardStats) -> Vec<ProjectShare> {
        let charted: Decimal = stats.donations_by_project.iter().map(|e| e.amount).sum();

        stats
            .donations_by_project
            .iter()
            .map(|entry| ProjectShare {
                project_name: entry.project_name.clone(),
                amount: entry.amount,
                percent: Self::whole_percent(entry.amount, charted)
                    .and_then(|percent| percent.to_i32())
                    .unwrap_or(0),
            })
            .collect()
    }

    fn totals_by_project<T: ProjectLine>(rows: &[T]) -> HashMap<ProjectId, Decimal> {
        let mut totals = HashMap::new();
        for row in rows {
            *totals.entry(row.project_id()).or_insert(Decimal::ZERO) += row.amount();
        }
        totals
    }

    fn total_for_project<T: ProjectLine>(rows: &[T], project_id: ProjectId) -> Decimal {
        rows.iter()
            .filter(|row| row.project_id() == project_id)
            .map(|row| row.amount())
            .sum()
    }

    fn progress_percent(raised: Decimal, target_amount: Decimal) -> i32 {
        debug_assert!(
            target_amount > Decimal::ZERO,
            "project target amount must be positive"
        );

        // Overflow only happens for ratios far above 100.
        Self::whole_percent(raised, target_amount)
            .unwrap_or(Decimal::ONE_HUNDRED)
            .min(Decimal::ONE_HUNDRED)
            .to_i32()
            .unwrap_or(0)
    }

    fn whole_percent(part: Decimal, total: Decimal) -> Option<Decimal> {
        part.checked_div(total)?
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|percent| percent.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PaymentMethod;
    use donatrack_shared::types::{DonationId, ExpenseId};
    use rust_decimal_macros::dec;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn project(id: i64, name: &str, target: Decimal) -> Project {
        Project {
            id: ProjectId::new(id),
            name: name.to_string(),
            description: format!("{name} description"),
            target_amount: target,
            target_date: ymd(2023, 12, 31),
        }
    }

    fn donation(id: i64, project_id: i64, amount: Decimal) -> Donation {
        Donation {
            id: DonationId::new(id),
            amount,
            donor_name: format!("Donor {id}"),
            payment_method: PaymentMethod::Cash,
            date: ymd(2023, 9, 15),
            project_id: ProjectId::new(project_id),
        }
    }

    fn expense(id: i64, project_id: i64, amount: Decimal) -> Expense {
        Expense {
            id: ExpenseId::new(id),
            amount,
            description: format!("Expense {id}"),
            date: ymd(2023, 9, 18),
            project_id: ProjectId::new(project_id),
        }
    }

    #[test]
    fn test_dashboard_stats_demo_data() {
        let projects = vec![
            project(1, "School Supplies for Children", dec!(5000)),
            project(2, "Food Bank Support", dec!(10000)),
            project(3, "Medical Aid Program", dec!(15000)),
        ];
        let donations = vec![
            donation(1, 1, dec!(100)),
            donation(2, 2, dec!(250)),
            donation(3, 1, dec!(500)),
            donation(4, 3, dec!(1000)),
        ];
        let expenses = vec![
            expense(1, 1, dec!(300)),
            expense(2, 2, dec!(450)),
            expense(3, 3, dec!(200)),
        ];

        let stats = ReportService::compute_dashboard_stats(&projects, &donations, &expenses);

        assert_eq!(stats.total_donations, dec!(1850));
        assert_eq!(stats.total_expenses, dec!(950));
        assert_eq!(stats.completed_projects, 0);
        assert_eq!(stats.active_projects, 3);
        let raised: Vec<_> = stats.donations_by_project.iter().map(|p| p.amount).collect();
        assert_eq!(raised, vec![dec!(600), dec!(250), dec!(1000)]);
        let spent: Vec<_> = stats.expenses_by_project.iter().map(|p| p.amount).collect();
        assert_eq!(spent, vec![dec!(300), dec!(450), dec!(200)]);
        assert_eq!(
            stats.donations_by_project[0].project_name,
            "School Supplies for Children"
        );
    }

    #[test]
    fn test_dashboard_stats_completed_at_exact_target() {
        let projects = vec![project(1, "Well", dec!(1000)), project(2, "Roof", dec!(500))];
        let donations = vec![donation(1, 1, dec!(1000)), donation(2, 2, dec!(499.99))];

        let stats = ReportService::compute_dashboard_stats(&projects, &donations, &[]);

        assert_eq!(stats.completed_projects, 1);
        assert_eq!(stats.active_projects, 1);
    }

    #[test]
    fn test_dashboard_stats_empty() {
        let stats = ReportService::compute_dashboard_stats(&[], &[], &[]);

        assert_eq!(stats.total_donations, Decimal::ZERO);
        assert_eq!(stats.total_expenses, Decimal::ZERO);
        assert_eq!(stats.active_projects, 0);
        assert_eq!(stats.completed_projects, 0);
        assert!(stats.donations_by_project.is_empty());
        assert!(stats.expenses_by_project.is_empty());
    }

    #[test]
    fn test_dashboard_stats_counts_orphans_in_totals_only() {
        let projects = vec![project(1, "Well", dec!(1000))];
        let donations = vec![donation(1, 1, dec!(100)), donation(2, 99, dec!(50))];

        let stats = ReportService::compute_dashboard_stats(&projects, &donations, &[]);

        assert_eq!(stats.total_donations, dec!(150));
        assert_eq!(stats.donations_by_project.len(), 1);
        assert_eq!(stats.donations_by_project[0].amount, dec!(100));
    }

    #[test]
    fn test_zero_activity_project_listed_with_zero() {
        let projects = vec![project(1, "Quiet", dec!(1000))];

        let stats = ReportService::compute_dashboard_stats(&projects, &[], &[]);

        assert_eq!(stats.donations_by_project[0].amount, Decimal::ZERO);
        assert_eq!(stats.expenses_by_project[0].amount, Decimal::ZERO);

        let summary =
            ReportService::compute_project_financial_summary(&projects[0], &[], &[], at(2023, 1, 1, 0));
        assert_eq!(summary.balance, Decimal::ZERO);
        assert!(!summary.is_loss());
    }

    #[test]
    fn test_progress_percent_rounds() {
        let donations = vec![donation(1, 1, dec!(100)), donation(2, 1, dec!(500))];
        assert_eq!(
            ReportService::compute_project_progress_percent(ProjectId::new(1), dec!(5000), &donations),
            12
        );

        // 1/8 = 12.5% rounds up
        let donations = vec![donation(1, 1, dec!(125))];
        assert_eq!(
            ReportService::compute_project_progress_percent(ProjectId::new(1), dec!(1000), &donations),
            13
        );
    }

    #[test]
    fn test_progress_percent_clamped() {
        let donations = vec![donation(1, 1, dec!(4000)), donation(2, 1, dec!(2000))];
        assert_eq!(
            ReportService::compute_project_progress_percent(ProjectId::new(1), dec!(5000), &donations),
            100
        );
    }

    #[test]
    fn test_progress_percent_ignores_other_projects() {
        let donations = vec![donation(1, 2, dec!(5000))];
        assert_eq!(
            ReportService::compute_project_progress_percent(ProjectId::new(1), dec!(5000), &donations),
            0
        );
    }

    #[test]
    fn test_days_remaining() {
        let target = ymd(2023, 12, 31);

        assert_eq!(ReportService::compute_days_remaining(target, at(2023, 12, 31, 0)), 0);
        assert_eq!(ReportService::compute_days_remaining(target, at(2024, 1, 1, 0)), 0);
        assert_eq!(ReportService::compute_days_remaining(target, at(2023, 12, 30, 0)), 1);
        assert_eq!(ReportService::compute_days_remaining(target, at(2023, 12, 30, 12)), 1);
        assert_eq!(ReportService::compute_days_remaining(target, at(2023, 12, 29, 23)), 2);
        assert_eq!(ReportService::compute_days_remaining(target, at(2023, 12, 1, 0)), 30);
    }

    #[test]
    fn test_financial_summary() {
        let p = project(1, "School Supplies", dec!(5000));
        let donations = vec![
            donation(1, 1, dec!(100)),
            donation(2, 1, dec!(500)),
            donation(3, 2, dec!(900)),
        ];
        let expenses = vec![expense(1, 1, dec!(300)), expense(2, 2, dec!(50))];

        let summary =
            ReportService::compute_project_financial_summary(&p, &donations, &expenses, at(2023, 12, 1, 0));

        assert_eq!(summary.project_id, ProjectId::new(1));
        assert_eq!(summary.total_donations, dec!(600));
        assert_eq!(summary.total_expenses, dec!(300));
        assert_eq!(summary.progress_percent, 12);
        assert_eq!(summary.remaining, dec!(4400));
        assert_eq!(summary.balance, dec!(300));
        assert_eq!(summary.days_remaining, 30);
    }

    #[test]
    fn test_financial_summary_negative_balance_and_overfunded() {
        let p = project(1, "Roof", dec!(5000));
        let donations = vec![donation(1, 1, dec!(6000))];
        let expenses = vec![expense(1, 1, dec!(7500))];

        let summary =
            ReportService::compute_project_financial_summary(&p, &donations, &expenses, at(2024, 6, 1, 0));

        assert_eq!(summary.progress_percent, 100);
        assert_eq!(summary.remaining, Decimal::ZERO);
        assert_eq!(summary.balance, dec!(-1500));
        assert!(summary.is_loss());
        assert_eq!(summary.days_remaining, 0);
    }

    #[test]
    fn test_chart_data_order() {
        let p = project(1, "Roof", dec!(5000));
        let donations = vec![donation(1, 1, dec!(600))];
        let expenses = vec![expense(1, 1, dec!(300))];
        let summary =
            ReportService::compute_project_financial_summary(&p, &donations, &expenses, at(2023, 1, 1, 0));

        let chart = ReportService::project_chart_data(&p, &summary);

        let names: Vec<_> = chart.iter().map(|point| point.name.as_str()).collect();
        assert_eq!(names, vec!["Donations", "Expenses", "Balance", "Target"]);
        let amounts: Vec<_> = chart.iter().map(|point| point.amount).collect();
        assert_eq!(amounts, vec![dec!(600), dec!(300), dec!(300), dec!(5000)]);
    }

    #[test]
    fn test_recent_donations_limit() {
        let donations: Vec<_> = (1..=8)
            .map(|id| donation(id, if id % 2 == 0 { 1 } else { 2 }, dec!(10)))
            .collect();

        let recent = ReportService::recent_donations(&donations, ProjectId::new(1), 3);

        let ids: Vec<_> = recent.iter().map(|d| d.id.into_inner()).collect();
        assert_eq!(ids, vec![2, 4, 6]);
        assert!(ReportService::recent_donations(&donations, ProjectId::new(9), 5).is_empty());
    }

    #[test]
    fn test_project_progress_rows() {
        let mut expired = project(1, "Old", dec!(1000));
        expired.target_date = ymd(2023, 1, 1);
        let open = project(2, "New", dec!(200));
        let donations = vec![donation(1, 2, dec!(50))];

        let rows = ReportService::project_progress_rows(
            &[expired, open],
            &donations,
            at(2023, 12, 30, 0),
        );

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].status, DeadlineStatus::Expired);
        assert_eq!(rows[0].days_remaining, 0);
        assert_eq!(rows[0].progress_percent, 0);
        assert_eq!(rows[1].status, DeadlineStatus::Open);
        assert_eq!(rows[1].days_remaining, 1);
        assert_eq!(rows[1].progress_percent, 25);
    }

    #[test]
    fn test_donation_share() {
        let projects = vec![project(1, "A", dec!(100)), project(2, "B", dec!(100))];
        let donations = vec![donation(1, 1, dec!(1)), donation(2, 2, dec!(2))];
        let stats = ReportService::compute_dashboard_stats(&projects, &donations, &[]);

        let shares = ReportService::donation_share_by_project(&stats);

        assert_eq!(shares[0].percent, 33);
        assert_eq!(shares[1].percent, 67);
    }

    #[test]
    fn test_donation_share_ignores_orphan_donations() {
        let projects = vec![project(1, "A", dec!(100)), project(3, "C", dec!(100))];
        let donations = vec![
            donation(1, 1, dec!(600)),
            donation(2, 2, dec!(250)),
            donation(3, 3, dec!(1000)),
        ];
        let stats = ReportService::compute_dashboard_stats(&projects, &donations, &[]);

        let percents: Vec<_> = ReportService::donation_share_by_project(&stats)
            .into_iter()
            .map(|share| share.percent)
            .collect();

        assert_eq!(stats.total_donations, dec!(1850));
        assert_eq!(percents, vec![38, 63]);
    }

    #[test]
    fn test_donation_share_without_donations() {
        let projects = vec![project(1, "A", dec!(100))];
        let stats = ReportService::compute_dashboard_stats(&projects, &[], &[]);

        let shares = ReportService::donation_share_by_project(&stats);

        assert_eq!(shares[0].percent, 0);
    }
}
