//! Axum router configuration for donation endpoints.
//!
//! This module defines the route structure for donation-related API
//! endpoints and wires them to their corresponding handlers.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_order, get_donation, verify_payment, DonationAppState};

/// Create the donation API router.
///
/// # Routes
///
/// - `POST /order` - Create a donation order at the gateway
/// - `POST /verify` - Verify a gateway payment callback
/// - `GET /:id` - Read back a donation record
///
/// Neither endpoint requires user authentication: donations are open to
/// anonymous donors, and verification is authenticated by the payment
/// signature itself.
pub fn donation_routes() -> Router<DonationAppState> {
    Router::new()
        .route("/order", post(create_order))
        .route("/verify", post(verify_payment))
        .route("/:id", get(get_donation))
}

/// Create the complete donation module router, suitable for mounting at
/// `/api/donations`.
pub fn donation_router() -> Router<DonationAppState> {
    Router::new().nest("/donations", donation_routes())
}
