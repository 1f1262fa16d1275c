//! PostgreSQL persistence adapters.

mod donation_repository;

pub use donation_repository::PostgresDonationRepository;
