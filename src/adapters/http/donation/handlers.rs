//! HTTP handlers for donation endpoints.
//!
//! These handlers connect Axum routes to application layer command handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::donation::{
    CreateDonationOrderCommand, CreateDonationOrderHandler, VerifyDonationPaymentCommand,
    VerifyDonationPaymentHandler,
};
use crate::config::PaymentConfig;
use crate::domain::donation::DonationError;
use crate::domain::foundation::DonationId;
use crate::ports::{DonationRepository, PaymentGateway};

use super::dto::{
    CreateOrderRequest, CreateOrderResponse, DonationResponse, ErrorResponse,
    VerifyPaymentRequest, VerifyPaymentResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped
/// dependencies for efficient sharing across handlers.
#[derive(Clone)]
pub struct DonationAppState {
    pub repository: Arc<dyn DonationRepository>,
    pub gateway: Arc<dyn PaymentGateway>,
    pub payment_config: PaymentConfig,
}

impl DonationAppState {
    /// Create handlers on demand from the shared state.
    pub fn create_order_handler(&self) -> CreateDonationOrderHandler {
        CreateDonationOrderHandler::new(
            self.repository.clone(),
            self.gateway.clone(),
            self.payment_config.clone(),
        )
    }

    pub fn verify_payment_handler(&self) -> VerifyDonationPaymentHandler {
        VerifyDonationPaymentHandler::new(self.repository.clone(), self.payment_config.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/donations/order - Create a donation order
pub async fn create_order(
    State(state): State<DonationAppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, DonationApiError> {
    let handler = state.create_order_handler();
    let cmd = CreateDonationOrderCommand {
        amount: request.amount,
        currency: request.currency,
        donor_name: request.donor_name,
        donor_email: request.donor_email,
        donor_phone: request.donor_phone,
    };

    let result = handler.handle(cmd).await?;

    let response = CreateOrderResponse {
        success: true,
        donation_id: result.donation.id.to_string(),
        key_id: result.handle.key_id,
        order: result.order,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/donations/verify - Verify a gateway payment callback
pub async fn verify_payment(
    State(state): State<DonationAppState>,
    Json(request): Json<VerifyPaymentRequest>,
) -> Result<impl IntoResponse, DonationApiError> {
    let donation_id: DonationId = request
        .donation_id
        .parse()
        .map_err(|_| DonationApiError::MalformedField("donation_id"))?;

    let handler = state.verify_payment_handler();
    let cmd = VerifyDonationPaymentCommand {
        payment_id: request.razorpay_payment_id,
        order_id: request.razorpay_order_id,
        signature: request.razorpay_signature,
        donation_id,
    };

    handler.handle(cmd).await?;

    let response = VerifyPaymentResponse {
        success: true,
        message: "Payment verified".to_string(),
    };

    Ok(Json(response))
}

/// GET /api/donations/:id - Read back a donation record
pub async fn get_donation(
    State(state): State<DonationAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, DonationApiError> {
    let donation_id: DonationId = id
        .parse()
        .map_err(|_| DonationApiError::MalformedField("donation_id"))?;

    let donation = state
        .repository
        .find_by_id(&donation_id)
        .await?
        .ok_or(DonationError::NotFound(donation_id))?;

    Ok(Json(DonationResponse::from(donation)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
pub enum DonationApiError {
    Domain(DonationError),
    MalformedField(&'static str),
}

impl From<DonationError> for DonationApiError {
    fn from(err: DonationError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for DonationApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            DonationApiError::MalformedField(field) => {
                (StatusCode::BAD_REQUEST, format!("Invalid {}", field))
            }
            DonationApiError::Domain(err) => {
                let status = match &err {
                    DonationError::InvalidAmount(_) | DonationError::MissingDonorInfo(_) => {
                        StatusCode::BAD_REQUEST
                    }
                    DonationError::SignatureMismatch => StatusCode::UNAUTHORIZED,
                    DonationError::NotFound(_) => StatusCode::NOT_FOUND,
                    DonationError::InvalidTransition(_) | DonationError::Cancelled => {
                        StatusCode::CONFLICT
                    }
                    DonationError::Gateway { .. } => StatusCode::BAD_GATEWAY,
                    DonationError::ConfigurationMissing | DonationError::Persistence(_) => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };

                // Operator-fix errors are surfaced generically; the detail
                // stays in the logs.
                let message = match &err {
                    DonationError::ConfigurationMissing | DonationError::Persistence(_) => {
                        "Payment processing failed, please try again later".to_string()
                    }
                    DonationError::Gateway { .. } => {
                        "Payment failed, please try again".to_string()
                    }
                    other => other.to_string(),
                };

                (status, message)
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
