//! Client payment orchestrator.
//!
//! Drives one donation attempt end-to-end: order creation, the gateway
//! checkout widget, and payment verification. The orchestrator is a
//! deterministic state machine; every path out of an in-flight phase lands
//! in `Succeeded` or `Failed`, so a dismissed checkout can never leave it
//! stuck in `AwaitingGateway`.

use std::sync::Arc;

use crate::domain::donation::{Amount, DonationError, DonorInfo};
use crate::domain::foundation::DonationId;
use crate::ports::{CheckoutError, CheckoutGateway, CheckoutOutcome};

use super::handlers::donation::{
    CreateDonationOrderCommand, CreateDonationOrderHandler, VerifyDonationPaymentCommand,
    VerifyDonationPaymentHandler,
};

/// Phases of one donation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutPhase {
    /// No attempt in flight.
    Idle,

    /// Order creation request sent to the backend.
    RequestingOrder,

    /// Gateway checkout open, awaiting the donor.
    AwaitingGateway,

    /// Gateway callback received, verification in flight.
    Verifying,

    /// Payment verified; the attempt is complete.
    Succeeded,

    /// The attempt ended without a verified payment.
    Failed,
}

/// A donation request as entered in the UI.
#[derive(Debug, Clone)]
pub struct DonationRequest {
    pub amount: f64,
    pub currency: Option<String>,
    pub donor_name: String,
    pub donor_email: String,
    pub donor_phone: String,
}

/// Successful outcome of a donation attempt.
#[derive(Debug, Clone)]
pub struct PaymentOutcome {
    /// The finalized donation record id.
    pub donation_id: DonationId,

    /// Raw gateway payment id, surfaced for receipt generation.
    pub payment_id: String,
}

/// Orchestrates the client side of the donation payment flow.
pub struct PaymentOrchestrator {
    create_order: CreateDonationOrderHandler,
    verify: VerifyDonationPaymentHandler,
    checkout: Arc<dyn CheckoutGateway>,
    phase: CheckoutPhase,
}

impl PaymentOrchestrator {
    pub fn new(
        create_order: CreateDonationOrderHandler,
        verify: VerifyDonationPaymentHandler,
        checkout: Arc<dyn CheckoutGateway>,
    ) -> Self {
        Self {
            create_order,
            verify,
            checkout,
            phase: CheckoutPhase::Idle,
        }
    }

    /// Current phase of the attempt.
    pub fn phase(&self) -> CheckoutPhase {
        self.phase
    }

    /// Run one donation attempt to a terminal phase.
    ///
    /// Errors are returned to the caller for display; a `Cancelled` error
    /// is the donor closing the widget, not a failure to alarm on. Retrying
    /// means invoking `donate` again, which starts a fresh attempt with a
    /// new donation record.
    pub async fn donate(
        &mut self,
        request: DonationRequest,
    ) -> Result<PaymentOutcome, DonationError> {
        // Pre-flight validation, duplicating the order service's checks for
        // fast feedback before any network call.
        if let Err(err) = Amount::from_f64(request.amount) {
            self.phase = CheckoutPhase::Failed;
            return Err(err.into());
        }
        if let Err(err) = DonorInfo::new(
            &request.donor_name,
            &request.donor_email,
            &request.donor_phone,
        ) {
            self.phase = CheckoutPhase::Failed;
            return Err(err.into());
        }

        // Order creation
        self.phase = CheckoutPhase::RequestingOrder;
        let created = match self
            .create_order
            .handle(CreateDonationOrderCommand {
                amount: request.amount,
                currency: request.currency,
                donor_name: request.donor_name,
                donor_email: request.donor_email,
                donor_phone: request.donor_phone,
            })
            .await
        {
            Ok(created) => created,
            Err(err) => {
                self.phase = CheckoutPhase::Failed;
                return Err(err);
            }
        };

        // Gateway checkout
        self.phase = CheckoutPhase::AwaitingGateway;
        let callback = match self.checkout.open(&created.handle).await {
            Ok(CheckoutOutcome::Completed(callback)) => callback,
            Ok(CheckoutOutcome::Dismissed) => {
                tracing::info!(
                    donation_id = %created.donation.id,
                    "Donor dismissed checkout"
                );
                self.phase = CheckoutPhase::Failed;
                return Err(DonationError::Cancelled);
            }
            Err(CheckoutError::Failed(description)) => {
                self.phase = CheckoutPhase::Failed;
                return Err(DonationError::gateway("CHECKOUT_FAILED", description));
            }
            Err(err @ CheckoutError::AlreadyConsumed) => {
                self.phase = CheckoutPhase::Failed;
                return Err(DonationError::gateway("CHECKOUT_FAILED", err.to_string()));
            }
        };

        // Verification
        self.phase = CheckoutPhase::Verifying;
        match self
            .verify
            .handle(VerifyDonationPaymentCommand {
                payment_id: callback.payment_id.clone(),
                order_id: callback.order_id,
                signature: callback.signature,
                donation_id: created.donation.id,
            })
            .await
        {
            Ok(_) => {
                self.phase = CheckoutPhase::Succeeded;
                Ok(PaymentOutcome {
                    donation_id: created.donation.id,
                    payment_id: callback.payment_id,
                })
            }
            Err(err) => {
                self.phase = CheckoutPhase::Failed;
                Err(err)
            }
        }
    }
}
