//! Donation HTTP module: DTOs, handlers, and routes.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::DonationAppState;
pub use routes::{donation_router, donation_routes};
