//! VerifyDonationPaymentHandler - Command handler for payment verification.
//!
//! This is the single authority for marking a donation `paid`. No other
//! code path may set that status.

use std::sync::Arc;

use secrecy::ExposeSecret;

use crate::config::PaymentConfig;
use crate::domain::donation::{signature, Donation, DonationError, DonationStatus};
use crate::domain::foundation::DonationId;
use crate::ports::DonationRepository;

/// Command carrying a client-reported payment result.
#[derive(Debug, Clone)]
pub struct VerifyDonationPaymentCommand {
    pub payment_id: String,
    pub order_id: String,
    pub signature: String,
    pub donation_id: DonationId,
}

/// Result of successful verification.
#[derive(Debug, Clone)]
pub struct VerifyDonationPaymentResult {
    /// The finalized donation record.
    pub donation: Donation,

    /// True when the record was already paid and this call was a no-op.
    pub already_paid: bool,
}

/// Handler for payment verification.
///
/// Recomputes the expected signature from the gateway secret and, on a
/// match, transitions the donation record to `paid`. Re-delivery of an
/// already-verified payload is an idempotent success.
pub struct VerifyDonationPaymentHandler {
    repository: Arc<dyn DonationRepository>,
    config: PaymentConfig,
}

impl VerifyDonationPaymentHandler {
    pub fn new(repository: Arc<dyn DonationRepository>, config: PaymentConfig) -> Self {
        Self { repository, config }
    }

    pub async fn handle(
        &self,
        cmd: VerifyDonationPaymentCommand,
    ) -> Result<VerifyDonationPaymentResult, DonationError> {
        // 1. A secret is required to recompute the signature
        let secret = self.config.key_secret.expose_secret();
        if secret.is_empty() {
            return Err(DonationError::ConfigurationMissing);
        }

        // 2. Verify the signature before touching the store
        if !signature::verify_signature(secret, &cmd.order_id, &cmd.payment_id, &cmd.signature) {
            // Logged distinctly: a mismatch is a tamper signal, not an
            // ordinary gateway error.
            tracing::warn!(
                donation_id = %cmd.donation_id,
                order_id = %cmd.order_id,
                payment_id = %cmd.payment_id,
                "Payment signature mismatch - blocking paid transition"
            );
            return Err(DonationError::SignatureMismatch);
        }

        // 3. Load the record the payment settles
        let mut donation = self
            .repository
            .find_by_id(&cmd.donation_id)
            .await?
            .ok_or(DonationError::NotFound(cmd.donation_id))?;

        // 4. The stored order id is immutable; a verified signature for a
        //    different order must not finalize this record
        if donation.gateway_order_id != cmd.order_id {
            return Err(DonationError::InvalidTransition(format!(
                "payment settles order {} but donation {} belongs to order {}",
                cmd.order_id, donation.id, donation.gateway_order_id
            )));
        }

        // 5. Idempotent re-delivery: already paid under this payment id
        if donation.status == DonationStatus::Paid
            && donation.gateway_payment_id.as_deref() == Some(cmd.payment_id.as_str())
        {
            tracing::info!(
                donation_id = %donation.id,
                payment_id = %cmd.payment_id,
                "Payment already verified - treating as no-op success"
            );
            return Ok(VerifyDonationPaymentResult {
                donation,
                already_paid: true,
            });
        }

        // 6. Finalize: pending -> paid with payment fields attached
        donation.mark_paid(cmd.payment_id.clone(), cmd.signature.clone())?;
        self.repository.update(&donation).await.map_err(|e| {
            // Money moved at the gateway but our ledger write failed; log
            // everything an operator needs for manual reconciliation.
            tracing::error!(
                donation_id = %donation.id,
                order_id = %cmd.order_id,
                payment_id = %cmd.payment_id,
                error = %e,
                "Failed to persist paid transition after verified payment"
            );
            e
        })?;

        tracing::info!(
            donation_id = %donation.id,
            payment_id = %cmd.payment_id,
            "Donation payment verified"
        );

        Ok(VerifyDonationPaymentResult {
            donation,
            already_paid: false,
        })
    }
}
