use serde::Serialize;
use tracing::debug;

use super::{
    fees::FeeSchedule,
    multiplier::CostMultiplier,
    pricing::{compute_pricing, PricingInput, PricingOutcome},
};
use crate::util::{
    format::format_currency,
    number::{clamp_tax_percent, parse_decimal},
};

/// Form model behind the calculator page. Fields hold the raw text the user
/// typed; parsing happens on every calculation.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    pub product_cost: String,
    pub tax_rate: String,
    pub variable_expenses: String,
    pub extra_cost: String,
    /// Slider value, in percent.
    pub margin_percent: String,
    pub free_shipping: bool,
    pub multiplier: CostMultiplier,
    pub fees: FeeSchedule,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::with_fees(FeeSchedule::default())
    }
}

impl CalculatorState {
    pub fn with_fees(fees: FeeSchedule) -> Self {
        Self {
            product_cost: String::new(),
            tax_rate: String::new(),
            variable_expenses: String::new(),
            extra_cost: String::new(),
            margin_percent: "0".to_string(),
            free_shipping: true,
            multiplier: CostMultiplier::default(),
            fees,
        }
    }

    pub fn pricing_input(&self) -> PricingInput {
        PricingInput {
            product_cost: parse_decimal(&self.product_cost),
            cost_multiplier: self.multiplier.get(),
            tax_rate_percent: clamp_tax_percent(parse_decimal(&self.tax_rate)),
            variable_expenses: parse_decimal(&self.variable_expenses),
            extra_cost: parse_decimal(&self.extra_cost),
            desired_margin_percent: parse_decimal(&self.margin_percent),
            free_shipping_program: self.free_shipping,
        }
    }

    pub fn outcome(&self) -> PricingOutcome {
        let input = self.pricing_input();
        let outcome = compute_pricing(&input, &self.fees);
        match outcome {
            PricingOutcome::Feasible(result) => debug!(
                sale_price = result.sale_price,
                net_profit = result.net_profit,
                multiplier = input.cost_multiplier,
                "recalculated sale price"
            ),
            PricingOutcome::InfeasibleMargin {
                denominator,
                max_margin_percent,
            } => debug!(
                margin = input.desired_margin_percent,
                denominator, max_margin_percent, "requested margin is infeasible"
            ),
        }
        outcome
    }

    /// Clears the form. The fee schedule is configuration and survives.
    pub fn reset(&mut self) {
        *self = Self::with_fees(self.fees);
    }

    pub fn snapshot(&self) -> PricingSnapshot {
        let input = self.pricing_input();
        let result = compute_pricing(&input, &self.fees).breakdown();
        PricingSnapshot {
            product_cost: input.product_cost,
            multiplier: self.multiplier,
            tax_rate_percent: input.tax_rate_percent,
            variable_expenses: input.variable_expenses,
            extra_cost: input.extra_cost,
            margin_percent: input.desired_margin_percent,
            free_shipping: input.free_shipping_program,
            sale_price: format_currency(result.sale_price),
            net_profit: format_currency(result.net_profit),
        }
    }
}

/// Exported view of the current calculation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PricingSnapshot {
    pub product_cost: f64,
    pub multiplier: CostMultiplier,
    pub tax_rate_percent: f64,
    pub variable_expenses: f64,
    pub extra_cost: f64,
    pub margin_percent: f64,
    pub free_shipping: bool,
    pub sale_price: String,
    pub net_profit: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CalculatorState {
        CalculatorState {
            product_cost: "50,00".to_string(),
            tax_rate: "10".to_string(),
            variable_expenses: "5".to_string(),
            extra_cost: "2,00".to_string(),
            margin_percent: "20".to_string(),
            free_shipping: false,
            ..CalculatorState::default()
        }
    }

    #[test]
    fn parses_locale_text_into_input() {
        let input = filled().pricing_input();
        assert_eq!(input.product_cost, 50.0);
        assert_eq!(input.extra_cost, 2.0);
        assert_eq!(input.cost_multiplier, 1);
        assert!(!input.free_shipping_program);
    }

    #[test]
    fn empty_form_reads_as_zeroes() {
        let input = CalculatorState::default().pricing_input();
        assert_eq!(input.product_cost, 0.0);
        assert_eq!(input.desired_margin_percent, 0.0);
        assert!(input.free_shipping_program);
    }

    #[test]
    fn tax_is_clamped_before_pricing() {
        let state = CalculatorState {
            tax_rate: "180".to_string(),
            ..filled()
        };
        assert_eq!(state.pricing_input().tax_rate_percent, 100.0);
    }

    #[test]
    fn multiplier_persists_across_recalculations() {
        let mut state = filled();
        state.multiplier.increment();
        let first = state.outcome().breakdown();
        state.margin_percent = "25".to_string();
        let second = state.outcome().breakdown();

        assert!((first.total_product_cost - 117.0).abs() < 1e-9);
        assert!((second.total_product_cost - 117.0).abs() < 1e-9);
        assert_eq!(state.pricing_input().cost_multiplier, 2);
    }

    #[test]
    fn reset_restores_defaults_but_keeps_fees() {
        let fees = FeeSchedule {
            fixed_fee_per_item: 2.5,
            ..FeeSchedule::default()
        };
        let mut state = CalculatorState {
            fees,
            ..filled()
        };
        state.multiplier.step(4);
        state.reset();

        assert_eq!(state, CalculatorState::with_fees(fees));
        assert!(state.free_shipping);
        assert_eq!(state.multiplier.get(), 1);
    }

    #[test]
    fn snapshot_reports_formatted_figures() {
        let snapshot = filled().snapshot();
        assert_eq!(snapshot.sale_price, "R$\u{a0}102,33");
        assert_eq!(snapshot.product_cost, 50.0);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["multiplier"], 1);
        assert_eq!(json["free_shipping"], false);
    }

    #[test]
    fn infeasible_snapshot_is_zeroed() {
        let state = CalculatorState {
            margin_percent: "90".to_string(),
            ..filled()
        };
        assert!(!state.outcome().is_feasible());
        assert_eq!(state.snapshot().sale_price, "R$\u{a0}0,00");
    }
}
