//! Session domain: token pair value objects and versioned identity state.

mod auth_state;
mod tokens;

pub use auth_state::AuthState;
pub use tokens::{Session, SessionTokens, UserProfile};
