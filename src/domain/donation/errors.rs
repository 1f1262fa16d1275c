//! Error types for the donation payment flow.
//!
//! Defines all error conditions that can occur during order creation,
//! checkout, and payment verification.

use thiserror::Error;

use crate::domain::foundation::{DonationId, ValidationError};

/// Errors that occur during the donation payment flow.
#[derive(Debug, Clone, Error)]
pub enum DonationError {
    /// Donation amount is zero, negative, or unrepresentable.
    #[error("Invalid donation amount: {0}")]
    InvalidAmount(String),

    /// A required donor field is empty.
    #[error("Missing donor field: {0}")]
    MissingDonorInfo(&'static str),

    /// Gateway credentials are absent from the configuration store.
    #[error("Payment gateway is not configured")]
    ConfigurationMissing,

    /// The payment gateway returned a non-success response.
    #[error("Gateway error {code}: {description}")]
    Gateway { code: String, description: String },

    /// The supplied payment signature does not match the expected value.
    ///
    /// Treated as a potential tampering attempt; must never allow the
    /// `paid` transition.
    #[error("Payment signature mismatch")]
    SignatureMismatch,

    /// Referenced donation record could not be found.
    #[error("Donation not found: {0}")]
    NotFound(DonationId),

    /// Attempted donation state transition is not valid.
    #[error("Invalid state transition: {0}")]
    InvalidTransition(String),

    /// Donation store write or update failed.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Donor dismissed the gateway checkout.
    #[error("Checkout cancelled by donor")]
    Cancelled,
}

impl DonationError {
    /// Creates an invalid amount error.
    pub fn invalid_amount(detail: impl Into<String>) -> Self {
        DonationError::InvalidAmount(detail.into())
    }

    /// Creates a gateway error from a code and description.
    pub fn gateway(code: impl Into<String>, description: impl Into<String>) -> Self {
        DonationError::Gateway {
            code: code.into(),
            description: description.into(),
        }
    }

    /// Creates a persistence error.
    pub fn persistence(detail: impl Into<String>) -> Self {
        DonationError::Persistence(detail.into())
    }

    /// Returns true if the donor can correct this error themselves.
    ///
    /// Validation errors are rejected before any network call; everything
    /// else requires a retry of the whole flow or an operator fix.
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            DonationError::InvalidAmount(_) | DonationError::MissingDonorInfo(_)
        )
    }

    /// Returns true if this error should be surfaced as a neutral state
    /// rather than an error banner.
    pub fn is_neutral(&self) -> bool {
        matches!(self, DonationError::Cancelled)
    }
}

impl From<ValidationError> for DonationError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyField { field } => {
                DonationError::MissingDonorInfo(match field.as_str() {
                    "donor_email" => "donor_email",
                    "donor_phone" => "donor_phone",
                    _ => "donor_name",
                })
            }
            ValidationError::NotPositive { actual, .. } => DonationError::InvalidAmount(actual),
            ValidationError::InvalidFormat { reason, .. } => DonationError::InvalidAmount(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_amount_displays_detail() {
        let err = DonationError::invalid_amount("-5");
        assert_eq!(format!("{}", err), "Invalid donation amount: -5");
    }

    #[test]
    fn missing_donor_info_displays_field() {
        let err = DonationError::MissingDonorInfo("donor_email");
        assert_eq!(format!("{}", err), "Missing donor field: donor_email");
    }

    #[test]
    fn gateway_error_displays_code_and_description() {
        let err = DonationError::gateway("BAD_REQUEST_ERROR", "amount too small");
        assert_eq!(
            format!("{}", err),
            "Gateway error BAD_REQUEST_ERROR: amount too small"
        );
    }

    #[test]
    fn validation_errors_are_user_correctable() {
        assert!(DonationError::invalid_amount("0").is_user_correctable());
        assert!(DonationError::MissingDonorInfo("donor_name").is_user_correctable());
    }

    #[test]
    fn infrastructure_errors_are_not_user_correctable() {
        assert!(!DonationError::ConfigurationMissing.is_user_correctable());
        assert!(!DonationError::SignatureMismatch.is_user_correctable());
        assert!(!DonationError::persistence("update failed").is_user_correctable());
    }

    #[test]
    fn cancelled_is_neutral() {
        assert!(DonationError::Cancelled.is_neutral());
        assert!(!DonationError::SignatureMismatch.is_neutral());
    }
}
