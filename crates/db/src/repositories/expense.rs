//! Expense repository.

use donatrack_core::model::{Expense, NewExpense};
use donatrack_shared::types::{ExpenseId, ProjectId};
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::store::{InMemoryStore, StoredEntity};

/// Repository for expense create/update/delete.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    store: InMemoryStore,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(store: InMemoryStore) -> Self {
        Self { store }
    }

    /// Lists expenses in insertion order.
    pub async fn list(&self) -> Vec<Expense> {
        self.store.read().await.expenses.to_vec()
    }

    /// Lists the expenses charged to a project.
    pub async fn list_by_project(&self, project_id: ProjectId) -> Vec<Expense> {
        self.store
            .read()
            .await
            .expenses
            .iter()
            .filter(|expense| expense.project_id == project_id)
            .cloned()
            .collect()
    }

    /// Finds an expense by ID.
    pub async fn find_by_id(&self, id: ExpenseId) -> Option<Expense> {
        self.store.read().await.expenses.get(id.into_inner()).cloned()
    }

    /// Records an expense with the next free ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if the input breaks an entry rule.
    pub async fn create(&self, input: NewExpense) -> Result<Expense, StoreError> {
        input.validate()?;

        let expense = self
            .store
            .write()
            .await
            .expenses
            .insert_with(|id| input.into_expense(ExpenseId::new(id)));

        debug!(
            expense_id = %expense.id,
            project_id = %expense.project_id,
            amount = %expense.amount,
            "Expense recorded"
        );
        Ok(expense)
    }

    /// Replaces an expense.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` on invalid input and
    /// `StoreError::NotFound` when the expense does not exist.
    pub async fn update(&self, expense: Expense) -> Result<Expense, StoreError> {
        expense.validate()?;

        let id = expense.id;
        if !self.store.write().await.expenses.replace(expense.clone()) {
            warn!(expense_id = %id, "Update of unknown expense");
            return Err(StoreError::NotFound {
                entity: Expense::ENTITY,
                id: id.into_inner(),
            });
        }

        debug!(expense_id = %id, "Expense updated");
        Ok(expense)
    }

    /// Deletes an expense. Returns false if it did not exist.
    pub async fn delete(&self, id: ExpenseId) -> bool {
        let removed = self.store.write().await.expenses.remove(id.into_inner());
        if removed {
            debug!(expense_id = %id, "Expense deleted");
        } else {
            warn!(expense_id = %id, "Delete of unknown expense");
        }
        removed
    }
}
