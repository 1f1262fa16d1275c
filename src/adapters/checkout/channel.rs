//! Channel-backed checkout bridge.
//!
//! The actual checkout widget runs out of process (an embedded script on
//! web, a native SDK on mobile). This adapter bridges it into the
//! orchestrator: `open` suspends on a oneshot channel, and the platform
//! layer resolves it through a [`CheckoutDriver`] when the widget reports
//! a payment, a failure, or a dismissal.
//!
//! Dropping the driver without reporting resolves `open` as a dismissal,
//! so tearing the widget down can never strand the orchestrator in its
//! awaiting-gateway phase.

use async_trait::async_trait;
use tokio::sync::{oneshot, Mutex};

use crate::ports::{CheckoutError, CheckoutGateway, CheckoutOutcome, OrderHandle, PaymentCallback};

type OutcomeSender = oneshot::Sender<Result<CheckoutOutcome, CheckoutError>>;
type OutcomeReceiver = oneshot::Receiver<Result<CheckoutOutcome, CheckoutError>>;

/// Checkout gateway that awaits a result delivered through a driver.
///
/// Each instance serves a single `open` call; the widget lifecycle is
/// one checkout per order.
pub struct ChannelCheckout {
    receiver: Mutex<Option<OutcomeReceiver>>,
}

/// Handle the platform layer uses to resolve a pending checkout.
pub struct CheckoutDriver {
    sender: OutcomeSender,
}

/// Creates a connected checkout/driver pair.
pub fn channel() -> (ChannelCheckout, CheckoutDriver) {
    let (sender, receiver) = oneshot::channel();
    (
        ChannelCheckout {
            receiver: Mutex::new(Some(receiver)),
        },
        CheckoutDriver { sender },
    )
}

impl CheckoutDriver {
    /// Report a completed payment from the gateway callback.
    pub fn complete(self, callback: PaymentCallback) {
        let _ = self.sender.send(Ok(CheckoutOutcome::Completed(callback)));
    }

    /// Report that the donor dismissed the widget.
    pub fn dismiss(self) {
        let _ = self.sender.send(Ok(CheckoutOutcome::Dismissed));
    }

    /// Report a payment failure surfaced inside the widget.
    pub fn fail(self, description: impl Into<String>) {
        let _ = self
            .sender
            .send(Err(CheckoutError::Failed(description.into())));
    }
}

#[async_trait]
impl CheckoutGateway for ChannelCheckout {
    async fn open(&self, handle: &OrderHandle) -> Result<CheckoutOutcome, CheckoutError> {
        let receiver = self
            .receiver
            .lock()
            .await
            .take()
            .ok_or(CheckoutError::AlreadyConsumed)?;

        tracing::debug!(
            order_id = %handle.order_id,
            amount_minor = handle.amount_minor,
            "Checkout opened, awaiting gateway verdict"
        );

        match receiver.await {
            Ok(outcome) => outcome,
            // Driver dropped without reporting: the widget was torn down,
            // which is a dismissal as far as the flow is concerned.
            Err(_) => Ok(CheckoutOutcome::Dismissed),
        }
    }
}
