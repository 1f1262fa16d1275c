//! HTTP DTOs (Data Transfer Objects) for donation endpoints.
//!
//! These types define the JSON request/response structure for the donation
//! API. They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::domain::donation::Donation;
use crate::ports::GatewayOrder;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a donation order.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    /// Donation amount in major currency units.
    pub amount: f64,

    /// ISO currency code; defaults to INR when omitted.
    #[serde(default)]
    pub currency: Option<String>,

    /// Donor's name.
    pub donor_name: String,

    /// Donor's email address.
    pub donor_email: String,

    /// Donor's phone number.
    pub donor_phone: String,
}

/// Request to verify a payment reported by the gateway checkout.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyPaymentRequest {
    /// Gateway payment identifier.
    pub razorpay_payment_id: String,

    /// Gateway order identifier.
    pub razorpay_order_id: String,

    /// Gateway payment signature.
    pub razorpay_signature: String,

    /// Donation record the payment settles.
    pub donation_id: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for successful order creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderResponse {
    /// Always true on the success path.
    pub success: bool,

    /// The raw gateway order, consumed by the checkout widget.
    pub order: GatewayOrder,

    /// Donation record id, echoed back on verification.
    pub donation_id: String,

    /// Public gateway key id the checkout widget authenticates with.
    pub key_id: String,
}

/// Response for successful payment verification.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyPaymentResponse {
    /// Always true on the success path.
    pub success: bool,

    /// Human-readable confirmation.
    pub message: String,
}

/// Donation record view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct DonationResponse {
    /// Donation id.
    pub id: String,

    /// Donor's name.
    pub donor_name: String,

    /// Donation amount in major units.
    pub amount: String,

    /// ISO currency code.
    pub currency: String,

    /// Current status.
    pub status: &'static str,

    /// Gateway order id.
    pub gateway_order_id: String,

    /// Gateway payment id, present once verified.
    pub gateway_payment_id: Option<String>,

    /// When the record was created (ISO 8601).
    pub created_at: String,

    /// When the record was last updated (ISO 8601).
    pub updated_at: String,
}

impl From<Donation> for DonationResponse {
    fn from(donation: Donation) -> Self {
        Self {
            id: donation.id.to_string(),
            donor_name: donation.donor.name().to_string(),
            amount: donation.amount.as_decimal().to_string(),
            currency: donation.currency,
            status: donation.status.as_str(),
            gateway_order_id: donation.gateway_order_id,
            gateway_payment_id: donation.gateway_payment_id,
            created_at: donation.created_at.as_datetime().to_rfc3339(),
            updated_at: donation.updated_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Always false on the error path.
    pub success: bool,

    /// Human-readable error description.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::donation::{Amount, DonorInfo};
    use crate::domain::foundation::DonationId;
    use rust_decimal_macros::dec;

    #[test]
    fn create_order_request_accepts_optional_currency() {
        let json = r#"{
            "amount": 50,
            "donor_name": "Asha",
            "donor_email": "a@x.com",
            "donor_phone": "9999999999"
        }"#;
        let request: CreateOrderRequest = serde_json::from_str(json).unwrap();
        assert!(request.currency.is_none());
        assert_eq!(request.amount, 50.0);
    }

    #[test]
    fn verify_request_uses_gateway_field_names() {
        let json = r#"{
            "razorpay_payment_id": "pay_abc",
            "razorpay_order_id": "order_abc",
            "razorpay_signature": "ab12",
            "donation_id": "7a1e3f62-5f4c-4f6e-9f2f-0123456789ab"
        }"#;
        let request: VerifyPaymentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.razorpay_payment_id, "pay_abc");
    }

    #[test]
    fn donation_response_reflects_record() {
        let mut donation = Donation::create_pending(
            DonationId::new(),
            DonorInfo::new("Asha", "a@x.com", "9999999999").unwrap(),
            Amount::new(dec!(50)).unwrap(),
            "INR",
            "order_dto123",
        );
        donation.mark_paid("pay_dto", "sig_hex").unwrap();

        let response = DonationResponse::from(donation);
        assert_eq!(response.status, "paid");
        assert_eq!(response.amount, "50");
        assert_eq!(response.gateway_payment_id.as_deref(), Some("pay_dto"));
    }

    #[test]
    fn error_response_serializes_failure_shape() {
        let json = serde_json::to_value(ErrorResponse::new("boom")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "boom");
    }
}
