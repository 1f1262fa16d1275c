//! Payment gateway port for external order creation.
//!
//! Defines the contract for the payment processor integration (Razorpay).
//! Implementations create orders server-side; the actual money movement
//! and checkout UI belong to the gateway.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::donation::DonationError;

/// Port for payment gateway integrations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an order at the gateway.
    ///
    /// Exactly one network call per invocation; no retries.
    async fn create_order(&self, request: GatewayOrderRequest)
        -> Result<GatewayOrder, GatewayError>;
}

/// Request to create a gateway order.
#[derive(Debug, Clone, Serialize)]
pub struct GatewayOrderRequest {
    /// Amount in the smallest currency unit (paise for INR).
    pub amount_minor: u64,

    /// ISO currency code.
    pub currency: String,

    /// Unique receipt token for reconciliation.
    pub receipt: String,
}

/// Order created at the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayOrder {
    /// Gateway order identifier.
    pub id: String,

    /// Amount in the smallest currency unit.
    pub amount_minor: u64,

    /// ISO currency code.
    pub currency: String,

    /// Receipt token echoed back by the gateway.
    pub receipt: Option<String>,

    /// Gateway-side order status (e.g. "created").
    pub status: String,

    /// Gateway creation timestamp (Unix seconds).
    pub created_at: i64,
}

/// Everything the client needs to open the gateway checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderHandle {
    /// Gateway order identifier.
    pub order_id: String,

    /// Amount in the smallest currency unit.
    pub amount_minor: u64,

    /// ISO currency code.
    pub currency: String,

    /// Public gateway key id the checkout widget authenticates with.
    pub key_id: String,
}

/// Error from a gateway operation.
///
/// Carries the gateway's error code and the response body description so
/// operators can reconcile failures.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{code}: {description}")]
pub struct GatewayError {
    /// Gateway error code (e.g. "BAD_REQUEST_ERROR").
    pub code: String,

    /// Human-readable description from the response body.
    pub description: String,
}

impl GatewayError {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }

    /// Network-level failure before any gateway response arrived.
    pub fn network(description: impl Into<String>) -> Self {
        Self::new("NETWORK_ERROR", description)
    }
}

impl From<GatewayError> for DonationError {
    fn from(err: GatewayError) -> Self {
        DonationError::Gateway {
            code: err.code,
            description: err.description,
        }
    }
}
