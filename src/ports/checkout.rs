//! Checkout capability port.
//!
//! The gateway's checkout widget is an external dependency (an embedded
//! script on web, a native SDK on mobile). This port abstracts it as a
//! single capability: open a checkout for an order handle and await the
//! outcome. Implementations are selected by a configuration-driven
//! factory, not inheritance.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::payment_gateway::OrderHandle;

/// Port for driving the gateway checkout UI.
///
/// # Contract
///
/// `open` must always resolve: a completed payment, a dismissal, or an
/// error. Implementations may not leave the caller waiting indefinitely
/// after the widget is torn down.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    /// Open the checkout for an order and await the gateway's verdict.
    async fn open(&self, handle: &OrderHandle) -> Result<CheckoutOutcome, CheckoutError>;
}

/// Terminal outcome of a checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The gateway reported a completed payment.
    Completed(PaymentCallback),

    /// The donor dismissed the checkout without paying.
    Dismissed,
}

/// Payment result delivered by the gateway on successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCallback {
    /// Gateway payment identifier.
    pub payment_id: String,

    /// Gateway order identifier the payment settles.
    pub order_id: String,

    /// HMAC signature over `order_id|payment_id`.
    pub signature: String,
}

/// Errors surfaced by the checkout widget itself.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CheckoutError {
    /// The gateway reported a payment failure inside the widget.
    #[error("Gateway checkout failed: {0}")]
    Failed(String),

    /// The checkout for this order was already opened and consumed.
    #[error("Checkout already consumed for this order")]
    AlreadyConsumed,
}
