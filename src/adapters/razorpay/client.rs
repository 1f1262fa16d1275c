//! Razorpay payment gateway adapter.
//!
//! Implements the `PaymentGateway` port against Razorpay's Orders API.
//! Authentication is HTTP basic auth with the key id as username and the
//! key secret as password.

use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::config::PaymentConfig;
use crate::ports::{GatewayError, GatewayOrder, GatewayOrderRequest, PaymentGateway};

use super::types::{RazorpayErrorResponse, RazorpayOrder, RazorpayOrderRequest};

/// Razorpay implementation of the payment gateway port.
pub struct RazorpayGateway {
    config: PaymentConfig,
    http_client: reqwest::Client,
}

impl RazorpayGateway {
    /// Create a new gateway adapter with the given configuration.
    pub fn new(config: PaymentConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    async fn create_order(
        &self,
        request: GatewayOrderRequest,
    ) -> Result<GatewayOrder, GatewayError> {
        let url = format!("{}/orders", self.config.api_base_url.trim_end_matches('/'));

        let body = RazorpayOrderRequest {
            amount: request.amount_minor,
            currency: request.currency,
            receipt: Some(request.receipt),
        };

        let response = self
            .http_client
            .post(&url)
            .basic_auth(
                &self.config.key_id,
                Some(self.config.key_secret.expose_secret()),
            )
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        tracing::debug!(status = %status, "Razorpay create_order response");

        if status.is_success() {
            let order: RazorpayOrder = serde_json::from_str(&body).map_err(|e| {
                GatewayError::new("MALFORMED_RESPONSE", format!("{}: {}", e, body))
            })?;

            tracing::info!(
                order_id = %order.id,
                amount_minor = order.amount,
                currency = %order.currency,
                "Razorpay order created"
            );

            Ok(GatewayOrder {
                id: order.id,
                amount_minor: order.amount,
                currency: order.currency,
                receipt: order.receipt,
                status: order.status,
                created_at: order.created_at,
            })
        } else {
            // The body is carried verbatim when it isn't the documented
            // error envelope, so nothing the gateway said is lost.
            let error = serde_json::from_str::<RazorpayErrorResponse>(&body)
                .map(|e| GatewayError::new(e.error.code, e.error.description))
                .unwrap_or_else(|_| GatewayError::new("UNKNOWN", body));

            tracing::error!(
                code = %error.code,
                description = %error.description,
                "Razorpay order creation failed"
            );
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use wiremock::matchers::{basic_auth, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str) -> PaymentConfig {
        PaymentConfig {
            key_id: "rzp_test_abc123".to_string(),
            key_secret: SecretString::new("secret123".to_string()),
            live_mode: false,
            api_base_url: base_url.to_string(),
        }
    }

    fn test_request() -> GatewayOrderRequest {
        GatewayOrderRequest {
            amount_minor: 5000,
            currency: "INR".to_string(),
            receipt: "don_1722945600123_0".to_string(),
        }
    }

    #[tokio::test]
    async fn creates_order_with_basic_auth() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/orders"))
            .and(basic_auth("rzp_test_abc123", "secret123"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{
                    "id": "order_EKwxwAgItmmXdp",
                    "entity": "order",
                    "amount": 5000,
                    "amount_paid": 0,
                    "amount_due": 5000,
                    "currency": "INR",
                    "receipt": "don_1722945600123_0",
                    "status": "created",
                    "attempts": 0,
                    "created_at": 1722945600
                }"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = RazorpayGateway::new(test_config(&server.uri()));
        let order = gateway.create_order(test_request()).await.unwrap();

        assert_eq!(order.id, "order_EKwxwAgItmmXdp");
        assert_eq!(order.amount_minor, 5000);
        assert_eq!(order.status, "created");
        assert_eq!(order.receipt.as_deref(), Some("don_1722945600123_0"));
    }

    #[tokio::test]
    async fn maps_error_envelope_to_gateway_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/orders"))
            .respond_with(ResponseTemplate::new(400).set_body_raw(
                r#"{
                    "error": {
                        "code": "BAD_REQUEST_ERROR",
                        "description": "The amount must be atleast INR 1.00"
                    }
                }"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let gateway = RazorpayGateway::new(test_config(&server.uri()));
        let err = gateway.create_order(test_request()).await.unwrap_err();

        assert_eq!(err.code, "BAD_REQUEST_ERROR");
        assert!(err.description.contains("atleast INR 1.00"));
    }

    #[tokio::test]
    async fn carries_unparseable_error_body_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/orders"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .mount(&server)
            .await;

        let gateway = RazorpayGateway::new(test_config(&server.uri()));
        let err = gateway.create_order(test_request()).await.unwrap_err();

        assert_eq!(err.code, "UNKNOWN");
        assert_eq!(err.description, "upstream unavailable");
    }

    #[tokio::test]
    async fn unreachable_gateway_is_a_network_error() {
        // Port 9 (discard) refuses connections
        let gateway = RazorpayGateway::new(test_config("http://127.0.0.1:9"));
        let err = gateway.create_order(test_request()).await.unwrap_err();

        assert_eq!(err.code, "NETWORK_ERROR");
    }

    #[tokio::test]
    async fn malformed_success_body_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/orders"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let gateway = RazorpayGateway::new(test_config(&server.uri()));
        let err = gateway.create_order(test_request()).await.unwrap_err();

        assert_eq!(err.code, "MALFORMED_RESPONSE");
    }
}
