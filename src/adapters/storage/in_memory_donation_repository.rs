//! In-Memory Donation Repository Adapter
//!
//! Stores donation records in memory. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::donation::{Donation, DonationError};
use crate::domain::foundation::DonationId;
use crate::ports::DonationRepository;

/// In-memory storage for donation records
#[derive(Debug, Clone, Default)]
pub struct InMemoryDonationRepository {
    donations: Arc<RwLock<HashMap<DonationId, Donation>>>,
}

impl InMemoryDonationRepository {
    /// Create a new in-memory repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.donations.write().await.clear();
    }

    /// Get the number of stored donations
    pub async fn count(&self) -> usize {
        self.donations.read().await.len()
    }
}

#[async_trait]
impl DonationRepository for InMemoryDonationRepository {
    async fn insert(&self, donation: &Donation) -> Result<(), DonationError> {
        let mut donations = self.donations.write().await;
        if donations.contains_key(&donation.id) {
            return Err(DonationError::persistence(format!(
                "donation {} already exists",
                donation.id
            )));
        }
        donations.insert(donation.id, donation.clone());
        Ok(())
    }

    async fn update(&self, donation: &Donation) -> Result<(), DonationError> {
        let mut donations = self.donations.write().await;
        if !donations.contains_key(&donation.id) {
            return Err(DonationError::persistence(format!(
                "donation {} does not exist",
                donation.id
            )));
        }
        donations.insert(donation.id, donation.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &DonationId) -> Result<Option<Donation>, DonationError> {
        Ok(self.donations.read().await.get(id).cloned())
    }

    async fn find_by_order_id(&self, order_id: &str) -> Result<Option<Donation>, DonationError> {
        Ok(self
            .donations
            .read()
            .await
            .values()
            .find(|d| d.gateway_order_id == order_id)
            .cloned())
    }
}
