//! Razorpay payment gateway adapter.

mod client;
mod types;

pub use client::RazorpayGateway;
