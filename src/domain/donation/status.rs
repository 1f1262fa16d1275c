//! Donation status state machine.
//!
//! Defines the lifecycle of a donation record. `Pending` is the only
//! initial state; every other state is terminal, so a record can never
//! regress from `Paid`.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Status of a donation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonationStatus {
    /// Order created at the gateway, awaiting checkout completion.
    Pending,

    /// Payment verified against the gateway signature. Terminal.
    Paid,

    /// Gateway reported a payment failure. Terminal.
    Failed,

    /// Donor dismissed the checkout. Terminal.
    Cancelled,
}

impl DonationStatus {
    /// Returns true if this status represents a finished donation attempt.
    pub fn is_settled(&self) -> bool {
        !matches!(self, DonationStatus::Pending)
    }

    /// Stable string form used in persistence and API responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            DonationStatus::Pending => "pending",
            DonationStatus::Paid => "paid",
            DonationStatus::Failed => "failed",
            DonationStatus::Cancelled => "cancelled",
        }
    }
}

impl StateMachine for DonationStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DonationStatus::*;
        matches!(
            (self, target),
            (Pending, Paid) | (Pending, Failed) | (Pending, Cancelled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DonationStatus::*;
        match self {
            Pending => vec![Paid, Failed, Cancelled],
            Paid | Failed | Cancelled => vec![],
        }
    }
}
