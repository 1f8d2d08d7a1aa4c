//! Keyed in-memory store.
//!
//! All three tables live behind one `RwLock`: writers are serialized and a
//! reader always sees every table at the same point in time.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use donatrack_core::model::{Donation, Expense, Project};
use donatrack_shared::types::ProjectId;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// An entity stored under an integer key.
pub trait StoredEntity: Clone + Send + Sync {
    /// Entity kind used in error messages.
    const ENTITY: &'static str;

    /// Store key of the entity.
    fn key(&self) -> i64;
}

impl StoredEntity for Project {
    const ENTITY: &'static str = "Project";

    fn key(&self) -> i64 {
        self.id.into_inner()
    }
}

impl StoredEntity for Donation {
    const ENTITY: &'static str = "Donation";

    fn key(&self) -> i64 {
        self.id.into_inner()
    }
}

impl StoredEntity for Expense {
    const ENTITY: &'static str = "Expense";

    fn key(&self) -> i64 {
        self.id.into_inner()
    }
}

/// One table of the store.
///
/// IDs come from a monotonic counter and are never handed out twice, so key
/// order is also insertion order.
#[derive(Debug)]
pub struct Table<T> {
    rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T: StoredEntity> Table<T> {
    /// Allocates the next ID and stores the row built from it.
    pub fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        self.last_id += 1;
        let row = build(self.last_id);
        self.rows.insert(self.last_id, row.clone());
        row
    }

    /// Replaces an existing row. Returns false when the key is unknown.
    pub fn replace(&mut self, row: T) -> bool {
        match self.rows.get_mut(&row.key()) {
            Some(slot) => {
                *slot = row;
                true
            }
            None => false,
        }
    }

    /// Removes a row. Returns false when the key is unknown.
    pub fn remove(&mut self, key: i64) -> bool {
        self.rows.remove(&key).is_some()
    }

    /// Looks up a row by key.
    #[must_use]
    pub fn get(&self, key: i64) -> Option<&T> {
        self.rows.get(&key)
    }

    /// Iterates rows in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    /// Number of stored rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Clones every row in insertion order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }
}

/// Tables guarded together by the store lock.
#[derive(Debug, Default)]
pub struct StoreState {
    /// Projects table.
    pub projects: Table<Project>,
    /// Donations table.
    pub donations: Table<Donation>,
    /// Expenses table.
    pub expenses: Table<Expense>,
}

/// Point-in-time copy of every table.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Projects in insertion order.
    pub projects: Vec<Project>,
    /// Donations in insertion order.
    pub donations: Vec<Donation>,
    /// Expenses in insertion order.
    pub expenses: Vec<Expense>,
}

/// Shared in-memory store. Cloning shares the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires shared read access.
    pub async fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().await
    }

    /// Acquires exclusive write access.
    pub async fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().await
    }
}

/// Read contract consumed by reporting.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Lists projects in insertion order.
    async fn list_projects(&self) -> Vec<Project>;

    /// Lists donations in insertion order.
    async fn list_donations(&self) -> Vec<Donation>;

    /// Lists expenses in insertion order.
    async fn list_expenses(&self) -> Vec<Expense>;

    /// Looks up a project.
    async fn get_project_by_id(&self, id: ProjectId) -> Option<Project>;

    /// Lists the donations credited to a project.
    async fn list_donations_by_project(&self, id: ProjectId) -> Vec<Donation>;

    /// Lists the expenses charged to a project.
    async fn list_expenses_by_project(&self, id: ProjectId) -> Vec<Expense>;

    /// Copies all three tables at a single point in time.
    async fn snapshot(&self) -> Snapshot;
}

#[async_trait]
impl DataStore for InMemoryStore {
    async fn list_projects(&self) -> Vec<Project> {
        self.read().await.projects.to_vec()
    }

    async fn list_donations(&self) -> Vec<Donation> {
        self.read().await.donations.to_vec()
    }

    async fn list_expenses(&self) -> Vec<Expense> {
        self.read().await.expenses.to_vec()
    }

    async fn get_project_by_id(&self, id: ProjectId) -> Option<Project> {
        self.read().await.projects.get(id.into_inner()).cloned()
    }

    async fn list_donations_by_project(&self, id: ProjectId) -> Vec<Donation> {
        self.read()
            .await
            .donations
            .iter()
            .filter(|donation| donation.project_id == id)
            .cloned()
            .collect()
    }

    async fn list_expenses_by_project(&self, id: ProjectId) -> Vec<Expense> {
        self.read()
            .await
            .expenses
            .iter()
            .filter(|expense| expense.project_id == id)
            .cloned()
            .collect()
    }

    async fn snapshot(&self) -> Snapshot {
        let state = self.read().await;
        Snapshot {
            projects: state.projects.to_vec(),
            donations: state.donations.to_vec(),
            expenses: state.expenses.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn project(id: i64, name: &str) -> Project {
        Project {
            id: ProjectId::new(id),
            name: name.to_string(),
            description: "A project used in store tests".to_string(),
            target_amount: dec!(1000),
            target_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_table_ids_are_monotonic() {
        let mut table = Table::<Project>::default();
        let first = table.insert_with(|id| project(id, "First"));
        let second = table.insert_with(|id| project(id, "Second"));
        assert_eq!(first.id, ProjectId::new(1));
        assert_eq!(second.id, ProjectId::new(2));

        assert!(table.remove(2));
        let third = table.insert_with(|id| project(id, "Third"));
        assert_eq!(third.id, ProjectId::new(3));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_table_replace_keeps_position() {
        let mut table = Table::<Project>::default();
        table.insert_with(|id| project(id, "First"));
        table.insert_with(|id| project(id, "Second"));

        assert!(table.replace(project(1, "Renamed")));
        assert!(!table.replace(project(9, "Missing")));

        let names: Vec<_> = table.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Renamed", "Second"]);
    }

    #[test]
    fn test_table_remove_unknown() {
        let mut table = Table::<Project>::default();
        assert!(table.is_empty());
        assert!(!table.remove(1));
        assert!(table.get(1).is_none());
    }
}
