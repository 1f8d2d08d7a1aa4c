//! Input validation for projects, donations and expenses.
//!
//! Rules apply when data enters the store. Rows already stored are never
//! re-validated, so reports must tolerate anything that was accepted earlier.

use rust_decimal::Decimal;
use thiserror::Error;

use super::types::{Donation, Expense, NewDonation, NewExpense, NewProject, Project};

/// Minimum characters in a project name.
pub const MIN_PROJECT_NAME_LEN: usize = 3;
/// Minimum characters in a project description.
pub const MIN_PROJECT_DESCRIPTION_LEN: usize = 10;
/// Minimum characters in a donor name.
pub const MIN_DONOR_NAME_LEN: usize = 2;
/// Minimum characters in an expense description.
pub const MIN_EXPENSE_DESCRIPTION_LEN: usize = 5;

/// Validation errors for entity input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Amount is zero or negative.
    #[error("Amount must be greater than 0, got {0}")]
    NonPositiveAmount(Decimal),

    /// Project name is too short.
    #[error("Name must be at least {min} characters")]
    NameTooShort {
        /// Required length.
        min: usize,
    },

    /// Description is too short.
    #[error("Description must be at least {min} characters")]
    DescriptionTooShort {
        /// Required length.
        min: usize,
    },

    /// Donor name is too short.
    #[error("Donor name must be at least {min} characters")]
    DonorNameTooShort {
        /// Required length.
        min: usize,
    },

    /// Payment method is not one of the supported methods.
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),
}

fn char_len(text: &str) -> usize {
    text.trim().chars().count()
}

fn validate_amount(amount: Decimal) -> Result<(), ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount(amount));
    }
    Ok(())
}

fn validate_project_fields(
    name: &str,
    description: &str,
    target_amount: Decimal,
) -> Result<(), ValidationError> {
    if char_len(name) < MIN_PROJECT_NAME_LEN {
        return Err(ValidationError::NameTooShort {
            min: MIN_PROJECT_NAME_LEN,
        });
    }
    if char_len(description) < MIN_PROJECT_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooShort {
            min: MIN_PROJECT_DESCRIPTION_LEN,
        });
    }
    validate_amount(target_amount)
}

fn validate_donation_fields(amount: Decimal, donor_name: &str) -> Result<(), ValidationError> {
    validate_amount(amount)?;
    if char_len(donor_name) < MIN_DONOR_NAME_LEN {
        return Err(ValidationError::DonorNameTooShort {
            min: MIN_DONOR_NAME_LEN,
        });
    }
    Ok(())
}

fn validate_expense_fields(amount: Decimal, description: &str) -> Result<(), ValidationError> {
    validate_amount(amount)?;
    if char_len(description) < MIN_EXPENSE_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooShort {
            min: MIN_EXPENSE_DESCRIPTION_LEN,
        });
    }
    Ok(())
}

impl NewProject {
    /// Validates the input against the project entry rules.
    ///
    /// # Errors
    ///
    /// Returns the first rule that is violated.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_project_fields(&self.name, &self.description, self.target_amount)
    }
}

impl Project {
    /// Validates a replacement project against the entry rules.
    ///
    /// # Errors
    ///
    /// Returns the first rule that is violated.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_project_fields(&self.name, &self.description, self.target_amount)
    }
}

impl NewDonation {
    /// Validates the input against the donation entry rules.
    ///
    /// # Errors
    ///
    /// Returns the first rule that is violated.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_donation_fields(self.amount, &self.donor_name)
    }
}

impl Donation {
    /// Validates a replacement donation against the entry rules.
    ///
    /// # Errors
    ///
    /// Returns the first rule that is violated.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_donation_fields(self.amount, &self.donor_name)
    }
}

impl NewExpense {
    /// Validates the input against the expense entry rules.
    ///
    /// # Errors
    ///
    /// Returns the first rule that is violated.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_expense_fields(self.amount, &self.description)
    }
}

impl Expense {
    /// Validates a replacement expense against the entry rules.
    ///
    /// # Errors
    ///
    /// Returns the first rule that is violated.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_expense_fields(self.amount, &self.description)
    }
}
