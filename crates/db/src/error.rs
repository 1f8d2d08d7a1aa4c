//! Store error types.

use donatrack_core::model::ValidationError;
use donatrack_shared::AppError;
use donatrack_shared::types::ProjectId;

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Entity to update does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind.
        entity: &'static str,
        /// Requested ID.
        id: i64,
    },

    /// Project requested for a report does not exist.
    #[error("Project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// Input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();
        match err {
            StoreError::NotFound { .. } | StoreError::ProjectNotFound(_) => {
                Self::NotFound(message)
            }
            StoreError::Validation(_) => Self::Validation(message),
        }
    }
}
