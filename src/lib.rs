//! Seva Backend - Donation and Session Services
//!
//! This crate implements the donation payment flow (gateway order creation,
//! HMAC signature verification, donation ledger) and the deep-link session
//! bootstrap for the Seva content platform.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
