//! Storage adapters.

mod in_memory_donation_repository;

pub use in_memory_donation_repository::InMemoryDonationRepository;
