//! Demo data seeder for Donatrack development.
//!
//! Loads the demo projects, donations and expenses into an in-memory store
//! and reports on them: dashboard totals, one summary per project and the
//! project list with deadlines. The dashboard is also printed as JSON.
//!
//! Usage: cargo run --bin seeder

use chrono::Utc;
use donatrack_db::fixtures::seed_demo_data;
use donatrack_db::{InMemoryStore, ReportRepository, ReportSettings};
use donatrack_shared::config::LoggingConfig;
use donatrack_shared::types::Money;
use donatrack_shared::{AppConfig, AppError, AppResult};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().map_err(AppError::from)?;
    init_tracing(&config.logging);

    if let Err(err) = seed_and_report(&config).await {
        error!(code = err.error_code(), error = %err, "Seeding failed");
        return Err(err.into());
    }

    Ok(())
}

async fn seed_and_report(config: &AppConfig) -> AppResult<()> {
    let store = InMemoryStore::new();
    if config.seed.demo_data {
        seed_demo_data(&store).await?;
    } else {
        warn!("Demo data disabled, reporting on an empty store");
    }

    let reports =
        ReportRepository::with_settings(store, ReportSettings::from_config(&config.reporting));
    let symbol = config.reporting.currency_symbol.as_str();
    let now = Utc::now();

    let stats = reports.dashboard_stats().await;
    info!(
        total_donations = %Money::new(stats.total_donations).display_with_symbol(symbol),
        total_expenses = %Money::new(stats.total_expenses).display_with_symbol(symbol),
        active = stats.active_projects,
        completed = stats.completed_projects,
        "Dashboard"
    );

    for share in reports.donation_shares().await {
        info!(
            project = %share.project_name,
            amount = %Money::new(share.amount).display_with_symbol(symbol),
            percent = share.percent,
            "Donation share"
        );
    }

    for row in reports.project_progress(now).await {
        let report = reports.project_summary(row.project_id, now).await?;
        let summary = &report.summary;
        info!(
            project = %row.name,
            raised = %Money::new(summary.total_donations).display_with_symbol(symbol),
            spent = %Money::new(summary.total_expenses).display_with_symbol(symbol),
            remaining = %Money::new(summary.remaining).display_with_symbol(symbol),
            balance = %Money::new(summary.balance).display_with_symbol(symbol),
            progress = summary.progress_percent,
            days_remaining = row.days_remaining,
            status = ?row.status,
            recent_donations = report.recent_donations.len(),
            "Project"
        );
        if summary.is_loss() {
            warn!(project = %row.name, "Project has spent more than it raised");
        }
    }

    let dashboard = serde_json::to_string_pretty(&stats)
        .map_err(|err| AppError::Internal(format!("dashboard could not be rendered: {err}")))?;
    println!("{dashboard}");

    Ok(())
}

fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
