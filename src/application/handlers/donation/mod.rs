//! Donation command handlers.

mod create_order;
mod verify_payment;

pub use create_order::{
    CreateDonationOrderCommand, CreateDonationOrderHandler, CreateDonationOrderResult,
};
pub use verify_payment::{
    VerifyDonationPaymentCommand, VerifyDonationPaymentHandler, VerifyDonationPaymentResult,
};
