//! Donation amount value object.
//!
//! Amounts are exact decimals in major currency units. The gateway wants
//! the smallest currency unit (paise for INR), so conversion multiplies by
//! 100 and rounds half-away-from-zero for determinism.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Upper bound for a single donation, in major units.
///
/// Keeps the minor-unit conversion comfortably inside u64 range and guards
/// against fat-finger entries.
const MAX_AMOUNT: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

/// A positive donation amount in major currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Creates an amount, rejecting zero, negative, and oversized values.
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value <= Decimal::ZERO {
            return Err(ValidationError::not_positive("amount", value.to_string()));
        }
        if value > MAX_AMOUNT {
            return Err(ValidationError::invalid_format(
                "amount",
                format!("exceeds maximum of {}", MAX_AMOUNT),
            ));
        }
        Ok(Self(value))
    }

    /// Creates an amount from an f64 as received in a JSON body.
    ///
    /// NaN and infinities are unrepresentable and rejected.
    pub fn from_f64(value: f64) -> Result<Self, ValidationError> {
        let decimal = Decimal::from_f64_retain(value).ok_or_else(|| {
            ValidationError::invalid_format("amount", format!("unrepresentable value {}", value))
        })?;
        Self::new(decimal)
    }

    /// Returns the amount in major units.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Converts to the gateway's smallest currency unit.
    ///
    /// Multiplies by 100 and rounds half-away-from-zero, so 10.005 becomes
    /// 1001 paise rather than flapping on the rounding mode.
    pub fn minor_units(&self) -> u64 {
        (self.0 * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u64()
            .expect("amount bounded at construction")
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn accepts_positive_amount() {
        let amount = Amount::new(dec!(50)).unwrap();
        assert_eq!(amount.as_decimal(), dec!(50));
    }

    #[test]
    fn rejects_zero() {
        assert!(Amount::new(Decimal::ZERO).is_err());
    }

    #[test]
    fn rejects_negative() {
        assert!(Amount::new(dec!(-10)).is_err());
    }

    #[test]
    fn rejects_oversized() {
        assert!(Amount::new(dec!(10000001)).is_err());
    }

    #[test]
    fn rejects_nan() {
        assert!(Amount::from_f64(f64::NAN).is_err());
    }

    #[test]
    fn rejects_infinity() {
        assert!(Amount::from_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn converts_whole_rupees_to_paise() {
        let amount = Amount::new(dec!(50)).unwrap();
        assert_eq!(amount.minor_units(), 5000);
    }

    #[test]
    fn converts_fractional_amounts() {
        let amount = Amount::new(dec!(10.50)).unwrap();
        assert_eq!(amount.minor_units(), 1050);
    }

    #[test]
    fn rounds_midpoint_away_from_zero() {
        // 10.005 * 100 = 1000.5, half-away-from-zero -> 1001
        let amount = Amount::new(dec!(10.005)).unwrap();
        assert_eq!(amount.minor_units(), 1001);
    }

    #[test]
    fn rounds_below_midpoint_down() {
        let amount = Amount::new(dec!(10.004)).unwrap();
        assert_eq!(amount.minor_units(), 1000);
    }

    #[test]
    fn from_f64_round_trips_typical_values() {
        let amount = Amount::from_f64(101.0).unwrap();
        assert_eq!(amount.minor_units(), 10100);
    }
}
