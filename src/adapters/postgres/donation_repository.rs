//! PostgreSQL implementation of DonationRepository.
//!
//! Provides persistent storage for Donation aggregates using PostgreSQL.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::donation::{Amount, Donation, DonationError, DonationStatus, DonorInfo};
use crate::domain::foundation::{DonationId, Timestamp};
use crate::ports::DonationRepository;

/// PostgreSQL implementation of the DonationRepository port.
///
/// Uses sqlx for type-safe database operations with connection pooling.
pub struct PostgresDonationRepository {
    pool: PgPool,
}

impl PostgresDonationRepository {
    /// Creates a new PostgresDonationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a donation.
#[derive(Debug, sqlx::FromRow)]
struct DonationRow {
    id: Uuid,
    donor_name: String,
    donor_email: String,
    donor_phone: String,
    amount: Decimal,
    currency: String,
    gateway_order_id: String,
    gateway_payment_id: Option<String>,
    gateway_signature: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<DonationRow> for Donation {
    type Error = DonationError;

    fn try_from(row: DonationRow) -> Result<Self, Self::Error> {
        let donor = DonorInfo::new(row.donor_name, row.donor_email, row.donor_phone)
            .map_err(|e| DonationError::persistence(format!("Invalid donor row: {}", e)))?;
        let amount = Amount::new(row.amount)
            .map_err(|e| DonationError::persistence(format!("Invalid amount row: {}", e)))?;
        let status = parse_status(&row.status)?;

        Ok(Donation {
            id: DonationId::from_uuid(row.id),
            donor,
            amount,
            currency: row.currency,
            gateway_order_id: row.gateway_order_id,
            gateway_payment_id: row.gateway_payment_id,
            gateway_signature: row.gateway_signature,
            status,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

fn parse_status(s: &str) -> Result<DonationStatus, DonationError> {
    match s {
        "pending" => Ok(DonationStatus::Pending),
        "paid" => Ok(DonationStatus::Paid),
        "failed" => Ok(DonationStatus::Failed),
        "cancelled" => Ok(DonationStatus::Cancelled),
        _ => Err(DonationError::persistence(format!(
            "Invalid status value: {}",
            s
        ))),
    }
}

#[async_trait]
impl DonationRepository for PostgresDonationRepository {
    async fn insert(&self, donation: &Donation) -> Result<(), DonationError> {
        sqlx::query(
            r#"
            INSERT INTO donations (
                id, donor_name, donor_email, donor_phone, amount, currency,
                gateway_order_id, gateway_payment_id, gateway_signature,
                status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(donation.id.as_uuid())
        .bind(donation.donor.name())
        .bind(donation.donor.email())
        .bind(donation.donor.phone())
        .bind(donation.amount.as_decimal())
        .bind(&donation.currency)
        .bind(&donation.gateway_order_id)
        .bind(&donation.gateway_payment_id)
        .bind(&donation.gateway_signature)
        .bind(donation.status.as_str())
        .bind(donation.created_at.as_datetime())
        .bind(donation.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DonationError::persistence(format!("Failed to insert donation: {}", e)))?;

        Ok(())
    }

    async fn update(&self, donation: &Donation) -> Result<(), DonationError> {
        let result = sqlx::query(
            r#"
            UPDATE donations
            SET gateway_payment_id = $2,
                gateway_signature = $3,
                status = $4,
                updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(donation.id.as_uuid())
        .bind(&donation.gateway_payment_id)
        .bind(&donation.gateway_signature)
        .bind(donation.status.as_str())
        .bind(donation.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DonationError::persistence(format!("Failed to update donation: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DonationError::persistence(format!(
                "donation {} does not exist",
                donation.id
            )));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &DonationId) -> Result<Option<Donation>, DonationError> {
        let row: Option<DonationRow> = sqlx::query_as(
            r#"
            SELECT id, donor_name, donor_email, donor_phone, amount, currency,
                   gateway_order_id, gateway_payment_id, gateway_signature,
                   status, created_at, updated_at
            FROM donations
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DonationError::persistence(format!("Failed to load donation: {}", e)))?;

        row.map(Donation::try_from).transpose()
    }

    async fn find_by_order_id(&self, order_id: &str) -> Result<Option<Donation>, DonationError> {
        let row: Option<DonationRow> = sqlx::query_as(
            r#"
            SELECT id, donor_name, donor_email, donor_phone, amount, currency,
                   gateway_order_id, gateway_payment_id, gateway_signature,
                   status, created_at, updated_at
            FROM donations
            WHERE gateway_order_id = $1
            "#,
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DonationError::persistence(format!("Failed to load donation: {}", e)))?;

        row.map(Donation::try_from).transpose()
    }
}
