//! Marketplace fee schedule: commission, transaction fee and fixed per-item fee.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_STANDARD_COMMISSION_RATE: f64 = 0.14;
/// Standard 14% plus the 6% charged by the free-shipping program.
pub const DEFAULT_FREE_SHIPPING_COMMISSION_RATE: f64 = 0.20;
pub const DEFAULT_TRANSACTION_FEE_RATE: f64 = 0.015;
pub const DEFAULT_FIXED_FEE_PER_ITEM: f64 = 4.00;

/// Fees the marketplace retains from every sale.
///
/// Rates are fractions of the sale price (`0.14` means 14%); the fixed fee
/// is a flat amount per unit sold.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    pub standard_commission_rate: f64,
    pub free_shipping_commission_rate: f64,
    pub transaction_fee_rate: f64,
    pub fixed_fee_per_item: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            standard_commission_rate: DEFAULT_STANDARD_COMMISSION_RATE,
            free_shipping_commission_rate: DEFAULT_FREE_SHIPPING_COMMISSION_RATE,
            transaction_fee_rate: DEFAULT_TRANSACTION_FEE_RATE,
            fixed_fee_per_item: DEFAULT_FIXED_FEE_PER_ITEM,
        }
    }
}

impl FeeSchedule {
    pub fn commission_rate(&self, free_shipping: bool) -> f64 {
        if free_shipping {
            self.free_shipping_commission_rate
        } else {
            self.standard_commission_rate
        }
    }

    /// Exclusive upper bound on the margin (in percent) that still leaves a
    /// positive share of the sale price to cover costs.
    pub fn max_margin_percent(&self, free_shipping: bool) -> f64 {
        (1.0 - self.commission_rate(free_shipping) - self.transaction_fee_rate) * 100.0
    }

    pub fn validate(&self) -> Result<(), FeeScheduleError> {
        check_rate("standard commission", self.standard_commission_rate)?;
        check_rate("free-shipping commission", self.free_shipping_commission_rate)?;
        check_rate("transaction fee", self.transaction_fee_rate)?;

        if !self.fixed_fee_per_item.is_finite() || self.fixed_fee_per_item < 0.0 {
            return Err(FeeScheduleError::NegativeFixedFee(self.fixed_fee_per_item));
        }

        for commission in [
            self.standard_commission_rate,
            self.free_shipping_commission_rate,
        ] {
            if commission + self.transaction_fee_rate >= 1.0 {
                return Err(FeeScheduleError::NoFeasibleMargin {
                    commission,
                    transaction: self.transaction_fee_rate,
                });
            }
        }

        Ok(())
    }

    /// Parses a schedule from JSON. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, FeeScheduleError> {
        let schedule: FeeSchedule = serde_json::from_str(raw)?;
        schedule.validate()?;
        Ok(schedule)
    }
}

fn check_rate(field: &'static str, value: f64) -> Result<(), FeeScheduleError> {
    if value.is_finite() && (0.0..1.0).contains(&value) {
        Ok(())
    } else {
        Err(FeeScheduleError::InvalidRate { field, value })
    }
}

#[derive(Debug, Error)]
pub enum FeeScheduleError {
    #[error("{field} rate must be between 0 and 1 (got {value})")]
    InvalidRate { field: &'static str, value: f64 },
    #[error("fixed fee per item must be zero or more (got {0})")]
    NegativeFixedFee(f64),
    #[error("commission {commission} plus transaction fee {transaction} leaves no room for any margin")]
    NoFeasibleMargin { commission: f64, transaction: f64 },
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_marketplace_rates() {
        let fees = FeeSchedule::default();
        assert_eq!(fees.commission_rate(false), 0.14);
        assert_eq!(fees.commission_rate(true), 0.20);
        assert_eq!(fees.transaction_fee_rate, 0.015);
        assert_eq!(fees.fixed_fee_per_item, 4.0);
        assert!(fees.validate().is_ok());
    }

    #[test]
    fn max_margin_depends_on_program() {
        let fees = FeeSchedule::default();
        assert!((fees.max_margin_percent(false) - 84.5).abs() < 1e-9);
        assert!((fees.max_margin_percent(true) - 78.5).abs() < 1e-9);
    }

    #[test]
    fn rejects_out_of_range_rates() {
        let fees = FeeSchedule {
            transaction_fee_rate: 1.2,
            ..FeeSchedule::default()
        };
        assert!(matches!(
            fees.validate(),
            Err(FeeScheduleError::InvalidRate { field: "transaction fee", .. })
        ));

        let fees = FeeSchedule {
            standard_commission_rate: f64::NAN,
            ..FeeSchedule::default()
        };
        assert!(matches!(
            fees.validate(),
            Err(FeeScheduleError::InvalidRate { .. })
        ));
    }

    #[test]
    fn rejects_negative_fixed_fee() {
        let fees = FeeSchedule {
            fixed_fee_per_item: -1.0,
            ..FeeSchedule::default()
        };
        assert!(matches!(
            fees.validate(),
            Err(FeeScheduleError::NegativeFixedFee(_))
        ));
    }

    #[test]
    fn rejects_schedule_with_no_room_for_margin() {
        let fees = FeeSchedule {
            free_shipping_commission_rate: 0.99,
            transaction_fee_rate: 0.02,
            ..FeeSchedule::default()
        };
        assert!(matches!(
            fees.validate(),
            Err(FeeScheduleError::NoFeasibleMargin { .. })
        ));
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let fees = FeeSchedule::from_json(r#"{ "fixed_fee_per_item": 3.5 }"#).unwrap();
        assert_eq!(fees.fixed_fee_per_item, 3.5);
        assert_eq!(fees.standard_commission_rate, DEFAULT_STANDARD_COMMISSION_RATE);
    }

    #[test]
    fn json_errors_surface() {
        assert!(matches!(
            FeeSchedule::from_json("{ not json"),
            Err(FeeScheduleError::Parse(_))
        ));
        assert!(matches!(
            FeeSchedule::from_json(r#"{ "transaction_fee_rate": -0.1 }"#),
            Err(FeeScheduleError::InvalidRate { .. })
        ));
    }
}
