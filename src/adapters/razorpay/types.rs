//! Razorpay wire types.
//!
//! Serde representations of the Orders API request and response bodies.
//! These stay private to the adapter; the rest of the crate works with
//! the gateway port types.

use serde::{Deserialize, Serialize};

/// Order creation request body.
#[derive(Debug, Serialize)]
pub(crate) struct RazorpayOrderRequest {
    /// Amount in the smallest currency unit (paise for INR).
    pub amount: u64,

    /// Currency code (e.g. "INR").
    pub currency: String,

    /// Receipt token for reconciliation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
}

/// Order object returned by the Orders API.
#[derive(Debug, Deserialize)]
pub(crate) struct RazorpayOrder {
    pub id: String,
    pub amount: u64,
    pub currency: String,
    pub receipt: Option<String>,
    pub status: String,
    pub created_at: i64,
}

/// Error envelope returned on non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct RazorpayErrorResponse {
    pub error: RazorpayErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RazorpayErrorDetail {
    pub code: String,
    pub description: String,
}
