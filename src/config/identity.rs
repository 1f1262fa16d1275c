//! Identity provider configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Identity provider configuration.
///
/// The platform delegates authentication to a managed identity service;
/// this section only needs its base URL and the public API key the client
/// tier presents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdentityConfig {
    /// Base URL of the identity service (e.g. https://auth.example.com)
    #[serde(default)]
    pub base_url: String,

    /// Public (anonymous) API key sent with identity requests
    #[serde(default)]
    pub api_key: String,
}

impl IdentityConfig {
    /// Validate identity configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("IDENTITY_BASE_URL"));
        }
        if *environment == Environment::Production && !self.base_url.starts_with("https://") {
            return Err(ValidationError::IdentityUrlMustBeHttps);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_base_url_is_rejected() {
        let config = IdentityConfig::default();
        assert!(config.validate(&Environment::Development).is_err());
    }

    #[test]
    fn http_url_allowed_in_development() {
        let config = IdentityConfig {
            base_url: "http://localhost:9999".to_string(),
            api_key: "anon".to_string(),
        };
        assert!(config.validate(&Environment::Development).is_ok());
    }

    #[test]
    fn http_url_rejected_in_production() {
        let config = IdentityConfig {
            base_url: "http://auth.example.com".to_string(),
            api_key: "anon".to_string(),
        };
        assert!(matches!(
            config.validate(&Environment::Production),
            Err(ValidationError::IdentityUrlMustBeHttps)
        ));
    }
}
