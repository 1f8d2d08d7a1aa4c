//! Donation repository.

use donatrack_core::model::{Donation, NewDonation};
use donatrack_shared::types::{DonationId, ProjectId};
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::store::{InMemoryStore, StoredEntity};

/// Repository for donation create/update/delete.
#[derive(Debug, Clone)]
pub struct DonationRepository {
    store: InMemoryStore,
}

impl DonationRepository {
    /// Creates a new donation repository.
    #[must_use]
    pub const fn new(store: InMemoryStore) -> Self {
        Self { store }
    }

    /// Lists donations in insertion order.
    pub async fn list(&self) -> Vec<Donation> {
        self.store.read().await.donations.to_vec()
    }

    /// Lists the donations credited to a project.
    pub async fn list_by_project(&self, project_id: ProjectId) -> Vec<Donation> {
        self.store
            .read()
            .await
            .donations
            .iter()
            .filter(|donation| donation.project_id == project_id)
            .cloned()
            .collect()
    }

    /// Finds a donation by ID.
    pub async fn find_by_id(&self, id: DonationId) -> Option<Donation> {
        self.store.read().await.donations.get(id.into_inner()).cloned()
    }

    /// Records a donation with the next free ID.
    ///
    /// The project is not required to exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if the input breaks an entry rule.
    pub async fn create(&self, input: NewDonation) -> Result<Donation, StoreError> {
        input.validate()?;

        let donation = self
            .store
            .write()
            .await
            .donations
            .insert_with(|id| input.into_donation(DonationId::new(id)));

        debug!(
            donation_id = %donation.id,
            project_id = %donation.project_id,
            amount = %donation.amount,
            "Donation recorded"
        );
        Ok(donation)
    }

    /// Replaces a donation.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` on invalid input and
    /// `StoreError::NotFound` when the donation does not exist.
    pub async fn update(&self, donation: Donation) -> Result<Donation, StoreError> {
        donation.validate()?;

        let id = donation.id;
        if !self.store.write().await.donations.replace(donation.clone()) {
            warn!(donation_id = %id, "Update of unknown donation");
            return Err(StoreError::NotFound {
                entity: Donation::ENTITY,
                id: id.into_inner(),
            });
        }

        debug!(donation_id = %id, "Donation updated");
        Ok(donation)
    }

    /// Deletes a donation. Returns false if it did not exist.
    pub async fn delete(&self, id: DonationId) -> bool {
        let removed = self.store.write().await.donations.remove(id.into_inner());
        if removed {
            debug!(donation_id = %id, "Donation deleted");
        } else {
            warn!(donation_id = %id, "Delete of unknown donation");
        }
        removed
    }
}
