//! CreateDonationOrderHandler - Command handler for donation order creation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::PaymentConfig;
use crate::domain::donation::{Amount, Donation, DonationError, DonorInfo};
use crate::domain::foundation::{DonationId, Timestamp};
use crate::ports::{DonationRepository, GatewayOrder, GatewayOrderRequest, OrderHandle, PaymentGateway};

/// Default currency when the request omits one.
const DEFAULT_CURRENCY: &str = "INR";

/// Per-process sequence folded into receipt tokens so two orders created
/// in the same millisecond still get distinct receipts.
static RECEIPT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Command to create a donation order.
#[derive(Debug, Clone)]
pub struct CreateDonationOrderCommand {
    pub amount: f64,
    pub currency: Option<String>,
    pub donor_name: String,
    pub donor_email: String,
    pub donor_phone: String,
}

/// Result of successful order creation.
#[derive(Debug, Clone)]
pub struct CreateDonationOrderResult {
    /// The pending donation record.
    pub donation: Donation,

    /// The raw gateway order, echoed to the client.
    pub order: GatewayOrder,

    /// Everything the checkout widget needs to open.
    pub handle: OrderHandle,
}

/// Handler for donation order creation.
///
/// Validates the request, creates an order at the gateway, and persists a
/// pending donation record. The record is written only after the gateway
/// responds, so a failed gateway call leaves no orphaned pending rows.
pub struct CreateDonationOrderHandler {
    repository: Arc<dyn DonationRepository>,
    gateway: Arc<dyn PaymentGateway>,
    config: PaymentConfig,
}

impl CreateDonationOrderHandler {
    pub fn new(
        repository: Arc<dyn DonationRepository>,
        gateway: Arc<dyn PaymentGateway>,
        config: PaymentConfig,
    ) -> Self {
        Self {
            repository,
            gateway,
            config,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateDonationOrderCommand,
    ) -> Result<CreateDonationOrderResult, DonationError> {
        // 1. Validate before any network call
        let amount = Amount::from_f64(cmd.amount)?;
        let donor = DonorInfo::new(&cmd.donor_name, &cmd.donor_email, &cmd.donor_phone)?;
        let currency = cmd
            .currency
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        // 2. Refuse to run without gateway credentials
        if !self.config.is_configured() {
            return Err(DonationError::ConfigurationMissing);
        }

        // 3. Create the order at the gateway (exactly one call, no retries)
        let receipt = next_receipt_token();
        let order = self
            .gateway
            .create_order(GatewayOrderRequest {
                amount_minor: amount.minor_units(),
                currency: currency.clone(),
                receipt,
            })
            .await?;

        // 4. Persist the pending record only after gateway success
        let donation = Donation::create_pending(
            DonationId::new(),
            donor,
            amount,
            currency,
            order.id.clone(),
        );
        self.repository.insert(&donation).await?;

        tracing::info!(
            donation_id = %donation.id,
            order_id = %order.id,
            amount_minor = order.amount_minor,
            currency = %order.currency,
            "Donation order created"
        );

        let handle = OrderHandle {
            order_id: order.id.clone(),
            amount_minor: order.amount_minor,
            currency: order.currency.clone(),
            key_id: self.config.key_id.clone(),
        };

        Ok(CreateDonationOrderResult {
            donation,
            order,
            handle,
        })
    }
}

/// Builds a time-based receipt nonce, e.g. `don_1722945600123_42`.
fn next_receipt_token() -> String {
    let seq = RECEIPT_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("don_{}_{}", Timestamp::now().as_unix_millis(), seq)
}
