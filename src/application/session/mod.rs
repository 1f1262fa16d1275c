//! Session bootstrap flow.

mod bootstrap;

pub use bootstrap::{BootstrapOutcome, SessionBootstrap};
