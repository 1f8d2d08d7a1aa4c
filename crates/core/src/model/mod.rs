//! Domain entities for fundraising projects and their cash flows.

pub mod types;
pub mod validation;

pub use types::{
    Donation, Expense, NewDonation, NewExpense, NewProject, PaymentMethod, Project, ProjectLine,
};
pub use validation::ValidationError;
