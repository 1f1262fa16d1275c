//! Payment gateway configuration (Razorpay)

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Payment gateway configuration.
///
/// Holds the Razorpay API credentials and mode flag. The key secret is
/// wrapped in [`SecretString`] so it never appears in debug output.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Razorpay key id (rzp_live_... or rzp_test_...)
    #[serde(default)]
    pub key_id: String,

    /// Razorpay key secret
    #[serde(default = "empty_secret")]
    pub key_secret: SecretString,

    /// Whether live-mode credentials are expected
    #[serde(default)]
    pub live_mode: bool,

    /// Base URL for the Razorpay API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl PaymentConfig {
    /// Check whether both credential fields are present.
    ///
    /// Order creation and payment verification refuse to run without them.
    pub fn is_configured(&self) -> bool {
        !self.key_id.is_empty() && !self.key_secret.expose_secret().is_empty()
    }

    /// Check if using test-mode credentials
    pub fn is_test_mode(&self) -> bool {
        self.key_id.starts_with("rzp_test_")
    }

    /// Check if using live-mode credentials
    pub fn is_live_mode(&self) -> bool {
        self.key_id.starts_with("rzp_live_")
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.key_id.is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT_KEY_ID"));
        }
        if self.key_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT_KEY_SECRET"));
        }

        // Verify key prefix for safety
        if !self.key_id.starts_with("rzp_") {
            return Err(ValidationError::InvalidGatewayKeyId);
        }
        if !self.api_base_url.starts_with("https://") {
            return Err(ValidationError::GatewayUrlMustBeHttps);
        }

        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            key_id: String::new(),
            key_secret: empty_secret(),
            live_mode: false,
            api_base_url: default_api_base_url(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://api.razorpay.com/v1".to_string()
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new())
}
