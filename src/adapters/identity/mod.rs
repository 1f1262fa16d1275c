//! Identity provider adapters.

mod rest;

pub use rest::RestIdentityProvider;
