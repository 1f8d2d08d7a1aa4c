//! Demo data for development and the seeder.

use chrono::NaiveDate;
use donatrack_core::model::{NewDonation, NewExpense, NewProject, PaymentMethod};
use rust_decimal::Decimal;
use tracing::info;

use crate::error::StoreError;
use crate::repositories::{DonationRepository, ExpenseRepository, ProjectRepository};
use crate::store::InMemoryStore;

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid fixture date"),
    }
}

/// (name, description, target, deadline)
const PROJECTS: [(&str, &str, i64, NaiveDate); 3] = [
    (
        "School Supplies for Children",
        "Providing school supplies for underprivileged children",
        5_000,
        date(2023, 12, 31),
    ),
    (
        "Food Bank Support",
        "Supporting local food banks with resources",
        10_000,
        date(2023, 11, 30),
    ),
    (
        "Medical Aid Program",
        "Providing medical aid to communities in need",
        15_000,
        date(2024, 3, 31),
    ),
];

/// (donor, amount, method, date, index into `PROJECTS`)
const DONATIONS: [(&str, i64, PaymentMethod, NaiveDate, usize); 4] = [
    ("John Doe", 100, PaymentMethod::CreditCard, date(2023, 9, 15), 0),
    ("Jane Smith", 250, PaymentMethod::BankTransfer, date(2023, 9, 20), 1),
    ("Michael Johnson", 500, PaymentMethod::PayPal, date(2023, 9, 25), 0),
    ("Sarah Williams", 1_000, PaymentMethod::Check, date(2023, 9, 28), 2),
];

/// (amount, description, date, index into `PROJECTS`)
const EXPENSES: [(i64, &str, NaiveDate, usize); 3] = [
    (300, "Purchase of school notebooks", date(2023, 9, 18), 0),
    (450, "Food purchase for food bank", date(2023, 9, 22), 1),
    (
        200,
        "Office supplies for volunteer coordination",
        date(2023, 9, 26),
        2,
    ),
];

/// Inserts three projects with their donations and expenses.
///
/// Rows are linked to the IDs the store assigns, so seeding a non-empty store
/// still produces a consistent data set.
///
/// # Errors
///
/// Returns an error if any fixture row fails validation.
pub async fn seed_demo_data(store: &InMemoryStore) -> Result<(), StoreError> {
    let projects = ProjectRepository::new(store.clone());
    let donations = DonationRepository::new(store.clone());
    let expenses = ExpenseRepository::new(store.clone());

    let mut project_ids = Vec::with_capacity(PROJECTS.len());
    for (name, description, target, target_date) in PROJECTS {
        let project = projects
            .create(NewProject {
                name: name.to_string(),
                description: description.to_string(),
                target_amount: Decimal::from(target),
                target_date,
            })
            .await?;
        project_ids.push(project.id);
    }

    for (donor, amount, payment_method, date, project) in DONATIONS {
        donations
            .create(NewDonation {
                amount: Decimal::from(amount),
                donor_name: donor.to_string(),
                payment_method,
                date,
                project_id: project_ids[project],
            })
            .await?;
    }

    for (amount, description, date, project) in EXPENSES {
        expenses
            .create(NewExpense {
                amount: Decimal::from(amount),
                description: description.to_string(),
                date,
                project_id: project_ids[project],
            })
            .await?;
    }

    info!(
        projects = PROJECTS.len(),
        donations = DONATIONS.len(),
        expenses = EXPENSES.len(),
        "Demo data seeded"
    );
    Ok(())
}
