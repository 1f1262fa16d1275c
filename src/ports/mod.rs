//! Ports: capability interfaces between the application core and adapters.

mod checkout;
mod donation_repository;
mod identity;
mod navigator;
mod payment_gateway;

pub use checkout::{CheckoutError, CheckoutGateway, CheckoutOutcome, PaymentCallback};
pub use donation_repository::DonationRepository;
pub use identity::{IdentityError, IdentityProvider};
pub use navigator::{Navigator, Route};
pub use payment_gateway::{GatewayError, GatewayOrder, GatewayOrderRequest, OrderHandle, PaymentGateway};
