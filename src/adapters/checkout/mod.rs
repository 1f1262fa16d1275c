//! Checkout widget adapters.
//!
//! The checkout capability is selected by a configuration-driven factory.
//! Web embeds the gateway's script, native uses the gateway SDK; both run
//! out of process and bridge their callbacks through [`ChannelCheckout`].

use std::sync::Arc;

use serde::Deserialize;

use crate::ports::CheckoutGateway;

mod channel;

pub use channel::{channel, ChannelCheckout, CheckoutDriver};

/// Platform hosting the checkout widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutPlatform {
    /// Embedded checkout script in the web client.
    Web,

    /// Native gateway SDK in the mobile client.
    Native,
}

/// Creates the checkout gateway for a platform, plus the driver the
/// platform layer resolves it through.
pub fn checkout_bridge(platform: CheckoutPlatform) -> (Arc<dyn CheckoutGateway>, CheckoutDriver) {
    tracing::debug!(?platform, "Creating checkout bridge");
    let (checkout, driver) = channel();
    (Arc::new(checkout), driver)
}
