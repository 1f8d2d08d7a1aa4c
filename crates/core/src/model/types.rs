//! Entity and input types.

use chrono::NaiveDate;
use donatrack_shared::types::{DonationId, ExpenseId, ProjectId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// A fundraising campaign with a monetary target and deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Store-assigned identifier.
    pub id: ProjectId,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Amount the project aims to raise. Always positive.
    pub target_amount: Decimal,
    /// Fundraising deadline.
    pub target_date: NaiveDate,
}

/// A monetary inflow credited to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    /// Store-assigned identifier.
    pub id: DonationId,
    /// Donated amount. Always positive.
    pub amount: Decimal,
    /// Name of the donor.
    pub donor_name: String,
    /// How the donation was paid.
    pub payment_method: PaymentMethod,
    /// Date the donation was received.
    pub date: NaiveDate,
    /// Project credited. May reference a project that no longer exists.
    pub project_id: ProjectId,
}

/// A monetary outflow charged against a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Store-assigned identifier.
    pub id: ExpenseId,
    /// Spent amount. Always positive.
    pub amount: Decimal,
    /// What the money was spent on.
    pub description: String,
    /// Date of the expense.
    pub date: NaiveDate,
    /// Project charged. May reference a project that no longer exists.
    pub project_id: ProjectId,
}

/// A row that moves money for a single project.
pub trait ProjectLine {
    /// Project the row is attributed to.
    fn project_id(&self) -> ProjectId;
    /// Amount of the row.
    fn amount(&self) -> Decimal;
}

impl ProjectLine for Donation {
    fn project_id(&self) -> ProjectId {
        self.project_id
    }

    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl ProjectLine for Expense {
    fn project_id(&self) -> ProjectId {
        self.project_id
    }

    fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Supported payment methods for donations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Credit card payment.
    #[serde(rename = "Credit Card")]
    CreditCard,
    /// Bank transfer.
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    /// Paper check.
    Check,
    /// Cash.
    Cash,
    /// PayPal.
    PayPal,
    /// Anything else.
    Other,
}

impl PaymentMethod {
    /// All payment methods in display order.
    pub const ALL: [Self; 6] = [
        Self::CreditCard,
        Self::BankTransfer,
        Self::Check,
        Self::Cash,
        Self::PayPal,
        Self::Other,
    ];

    /// Returns the display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::BankTransfer => "Bank Transfer",
            Self::Check => "Check",
            Self::Cash => "Cash",
            Self::PayPal => "PayPal",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownPaymentMethod(s.to_string()))
    }
}

/// Input for creating a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Amount the project aims to raise.
    pub target_amount: Decimal,
    /// Fundraising deadline.
    pub target_date: NaiveDate,
}

impl NewProject {
    /// Builds the stored entity once the store has assigned an ID.
    #[must_use]
    pub fn into_project(self, id: ProjectId) -> Project {
        Project {
            id,
            name: self.name,
            description: self.description,
            target_amount: self.target_amount,
            target_date: self.target_date,
        }
    }
}

/// Input for recording a donation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDonation {
    /// Donated amount.
    pub amount: Decimal,
    /// Name of the donor.
    pub donor_name: String,
    /// How the donation was paid.
    pub payment_method: PaymentMethod,
    /// Date the donation was received.
    pub date: NaiveDate,
    /// Project credited.
    pub project_id: ProjectId,
}

impl NewDonation {
    /// Builds the stored entity once the store has assigned an ID.
    #[must_use]
    pub fn into_donation(self, id: DonationId) -> Donation {
        Donation {
            id,
            amount: self.amount,
            donor_name: self.donor_name,
            payment_method: self.payment_method,
            date: self.date,
            project_id: self.project_id,
        }
    }
}

/// Input for recording an expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    /// Spent amount.
    pub amount: Decimal,
    /// What the money was spent on.
    pub description: String,
    /// Date of the expense.
    pub date: NaiveDate,
    /// Project charged.
    pub project_id: ProjectId,
}

impl NewExpense {
    /// Builds the stored entity once the store has assigned an ID.
    #[must_use]
    pub fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            amount: self.amount,
            description: self.description,
            date: self.date,
            project_id: self.project_id,
        }
    }
}
