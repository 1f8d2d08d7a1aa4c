//! Project repository.

use donatrack_core::model::{NewProject, Project};
use donatrack_shared::types::ProjectId;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::store::{InMemoryStore, StoredEntity};

/// Repository for project create/update/delete.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    store: InMemoryStore,
}

impl ProjectRepository {
    /// Creates a new project repository.
    #[must_use]
    pub const fn new(store: InMemoryStore) -> Self {
        Self { store }
    }

    /// Lists projects in insertion order.
    pub async fn list(&self) -> Vec<Project> {
        self.store.read().await.projects.to_vec()
    }

    /// Finds a project by ID.
    pub async fn find_by_id(&self, id: ProjectId) -> Option<Project> {
        self.store.read().await.projects.get(id.into_inner()).cloned()
    }

    /// Creates a project with the next free ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if the input breaks an entry rule.
    pub async fn create(&self, input: NewProject) -> Result<Project, StoreError> {
        input.validate()?;

        let project = self
            .store
            .write()
            .await
            .projects
            .insert_with(|id| input.into_project(ProjectId::new(id)));

        debug!(project_id = %project.id, name = %project.name, "Project created");
        Ok(project)
    }

    /// Replaces a project.
    ///
    /// Donations and expenses keep pointing at the project ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` on invalid input and
    /// `StoreError::NotFound` when the project does not exist.
    pub async fn update(&self, project: Project) -> Result<Project, StoreError> {
        project.validate()?;

        let id = project.id;
        if !self.store.write().await.projects.replace(project.clone()) {
            warn!(project_id = %id, "Update of unknown project");
            return Err(StoreError::NotFound {
                entity: Project::ENTITY,
                id: id.into_inner(),
            });
        }

        debug!(project_id = %id, "Project updated");
        Ok(project)
    }

    /// Deletes a project. Returns false if it did not exist.
    ///
    /// Rows attributed to the project are left in place and report as
    /// belonging to an unknown project.
    pub async fn delete(&self, id: ProjectId) -> bool {
        let removed = self.store.write().await.projects.remove(id.into_inner());
        if removed {
            debug!(project_id = %id, "Project deleted");
        } else {
            warn!(project_id = %id, "Delete of unknown project");
        }
        removed
    }
}
