//! Donation aggregate entity.
//!
//! A Donation tracks one donation attempt end-to-end, from gateway order
//! creation through payment verification.
//!
//! # Invariants
//!
//! - `Pending` is the only initial state; `Paid`, `Failed`, and `Cancelled`
//!   are terminal, so a record can never regress from `Paid`
//! - `gateway_order_id` is immutable once set (it is assigned at creation,
//!   because the record is only written after the gateway order succeeds)
//! - Payment id and signature are attached exactly once, by verification

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DonationId, StateMachine, Timestamp};

use super::{Amount, DonationError, DonationStatus, DonorInfo};

/// Donation aggregate - one donation attempt in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    /// Unique identifier, assigned at creation.
    pub id: DonationId,

    /// Donor contact details.
    pub donor: DonorInfo,

    /// Donation amount in major currency units.
    pub amount: Amount,

    /// ISO currency code (e.g. "INR").
    pub currency: String,

    /// Gateway-issued order identifier. Immutable once set.
    pub gateway_order_id: String,

    /// Gateway-issued payment identifier. Absent until verified.
    pub gateway_payment_id: Option<String>,

    /// Gateway payment signature. Absent until verified.
    pub gateway_signature: Option<String>,

    /// Current lifecycle status.
    pub status: DonationStatus,

    /// When the record was created.
    pub created_at: Timestamp,

    /// When the record was last updated.
    pub updated_at: Timestamp,
}

impl Donation {
    /// Creates a pending donation record after a successful gateway order.
    pub fn create_pending(
        id: DonationId,
        donor: DonorInfo,
        amount: Amount,
        currency: impl Into<String>,
        gateway_order_id: impl Into<String>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            donor,
            amount,
            currency: currency.into(),
            gateway_order_id: gateway_order_id.into(),
            gateway_payment_id: None,
            gateway_signature: None,
            status: DonationStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks this donation as paid, attaching the verified payment id and
    /// signature.
    ///
    /// Idempotent: re-invoking on an already-`Paid` record with the same
    /// payment id is a no-op success, so webhook or callback re-delivery
    /// causes no double side effects.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` if the record is terminal with a
    /// different outcome, or `Paid` under a different payment id.
    pub fn mark_paid(
        &mut self,
        payment_id: impl Into<String>,
        signature: impl Into<String>,
    ) -> Result<(), DonationError> {
        let payment_id = payment_id.into();

        if self.status == DonationStatus::Paid {
            return if self.gateway_payment_id.as_deref() == Some(payment_id.as_str()) {
                Ok(())
            } else {
                Err(DonationError::InvalidTransition(format!(
                    "donation {} already paid under payment {}",
                    self.id,
                    self.gateway_payment_id.as_deref().unwrap_or("<none>")
                )))
            };
        }

        self.transition_to(DonationStatus::Paid)?;
        self.gateway_payment_id = Some(payment_id);
        self.gateway_signature = Some(signature.into());
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Marks this donation as failed after a gateway-reported failure.
    pub fn mark_failed(&mut self) -> Result<(), DonationError> {
        self.transition_to(DonationStatus::Failed)?;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Marks this donation as cancelled after the donor dismissed checkout.
    pub fn cancel(&mut self) -> Result<(), DonationError> {
        self.transition_to(DonationStatus::Cancelled)?;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Returns true if this donation attempt reached a terminal status.
    pub fn is_settled(&self) -> bool {
        self.status.is_settled()
    }

    /// Transition to a new status using the state machine.
    fn transition_to(&mut self, target: DonationStatus) -> Result<(), DonationError> {
        self.status = self.status.transition_to(target).map_err(|_| {
            DonationError::InvalidTransition(format!(
                "Cannot transition donation from {:?} to {:?}",
                self.status, target
            ))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn test_donation() -> Donation {
        Donation::create_pending(
            DonationId::new(),
            DonorInfo::new("Asha", "a@x.com", "9999999999").unwrap(),
            Amount::new(dec!(50)).unwrap(),
            "INR",
            "order_test123",
        )
    }

    // ══════════════════════════════════════════════════════════════
    // Creation Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn created_donation_is_pending() {
        let donation = test_donation();
        assert_eq!(donation.status, DonationStatus::Pending);
        assert!(donation.gateway_payment_id.is_none());
        assert!(donation.gateway_signature.is_none());
    }

    #[test]
    fn created_donation_carries_order_id() {
        let donation = test_donation();
        assert_eq!(donation.gateway_order_id, "order_test123");
    }

    // ══════════════════════════════════════════════════════════════
    // Paid Transition Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn mark_paid_attaches_payment_fields() {
        let mut donation = test_donation();
        donation.mark_paid("pay_abc", "sig_hex").unwrap();

        assert_eq!(donation.status, DonationStatus::Paid);
        assert_eq!(donation.gateway_payment_id.as_deref(), Some("pay_abc"));
        assert_eq!(donation.gateway_signature.as_deref(), Some("sig_hex"));
    }

    #[test]
    fn mark_paid_twice_with_same_payment_is_noop() {
        let mut donation = test_donation();
        donation.mark_paid("pay_abc", "sig_hex").unwrap();
        let updated_at = donation.updated_at;

        donation.mark_paid("pay_abc", "sig_hex").unwrap();

        assert_eq!(donation.status, DonationStatus::Paid);
        assert_eq!(donation.gateway_payment_id.as_deref(), Some("pay_abc"));
        assert_eq!(donation.updated_at, updated_at);
    }

    #[test]
    fn mark_paid_with_different_payment_id_is_rejected() {
        let mut donation = test_donation();
        donation.mark_paid("pay_abc", "sig_hex").unwrap();

        let result = donation.mark_paid("pay_other", "sig_other");
        assert!(matches!(result, Err(DonationError::InvalidTransition(_))));
        assert_eq!(donation.gateway_payment_id.as_deref(), Some("pay_abc"));
    }

    #[test]
    fn paid_cannot_be_cancelled() {
        let mut donation = test_donation();
        donation.mark_paid("pay_abc", "sig_hex").unwrap();

        assert!(donation.cancel().is_err());
        assert_eq!(donation.status, DonationStatus::Paid);
    }

    #[test]
    fn paid_cannot_be_failed() {
        let mut donation = test_donation();
        donation.mark_paid("pay_abc", "sig_hex").unwrap();

        assert!(donation.mark_failed().is_err());
        assert_eq!(donation.status, DonationStatus::Paid);
    }

    // ══════════════════════════════════════════════════════════════
    // Failed / Cancelled Transition Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn pending_can_be_cancelled() {
        let mut donation = test_donation();
        donation.cancel().unwrap();
        assert_eq!(donation.status, DonationStatus::Cancelled);
    }

    #[test]
    fn pending_can_be_failed() {
        let mut donation = test_donation();
        donation.mark_failed().unwrap();
        assert_eq!(donation.status, DonationStatus::Failed);
    }

    #[test]
    fn cancelled_cannot_become_paid() {
        let mut donation = test_donation();
        donation.cancel().unwrap();

        let result = donation.mark_paid("pay_abc", "sig_hex");
        assert!(matches!(result, Err(DonationError::InvalidTransition(_))));
        assert!(donation.gateway_payment_id.is_none());
    }

    #[test]
    fn settled_reflects_terminal_states() {
        let mut donation = test_donation();
        assert!(!donation.is_settled());
        donation.mark_failed().unwrap();
        assert!(donation.is_settled());
    }
}
