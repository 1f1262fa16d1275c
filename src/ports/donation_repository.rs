//! Donation repository port for ledger persistence.

use async_trait::async_trait;

use crate::domain::donation::{Donation, DonationError};
use crate::domain::foundation::DonationId;

/// Port for persisting donation records.
///
/// # Contract
///
/// - `insert` writes a brand-new record; inserting an existing id is an error
/// - `update` replaces an existing record; updating a missing id is an error
/// - Store failures surface as `DonationError::Persistence`
#[async_trait]
pub trait DonationRepository: Send + Sync {
    /// Persist a new donation record.
    async fn insert(&self, donation: &Donation) -> Result<(), DonationError>;

    /// Replace an existing donation record.
    async fn update(&self, donation: &Donation) -> Result<(), DonationError>;

    /// Find a donation by its identifier.
    async fn find_by_id(&self, id: &DonationId) -> Result<Option<Donation>, DonationError>;

    /// Find a donation by its gateway order identifier.
    async fn find_by_order_id(&self, order_id: &str) -> Result<Option<Donation>, DonationError>;
}
