use serde::{Deserialize, Serialize};

use super::fees::FeeSchedule;

/// Normalized calculator input. All amounts share one currency unit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingInput {
    pub product_cost: f64,
    /// Bulk-lot size; always at least 1.
    pub cost_multiplier: u32,
    /// Already clamped to `0..=100`.
    pub tax_rate_percent: f64,
    pub variable_expenses: f64,
    pub extra_cost: f64,
    pub desired_margin_percent: f64,
    pub free_shipping_program: bool,
}

impl Default for PricingInput {
    fn default() -> Self {
        Self {
            product_cost: 0.0,
            cost_multiplier: 1,
            tax_rate_percent: 0.0,
            variable_expenses: 0.0,
            extra_cost: 0.0,
            desired_margin_percent: 0.0,
            free_shipping_program: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub sale_price: f64,
    pub net_profit: f64,
    pub total_marketplace_fee: f64,
    pub tax_amount: f64,
    pub total_product_cost: f64,
    pub return_on_cost_percent: f64,
    pub markup_percent: f64,
    pub markup_multiplier: f64,
}

impl PricingResult {
    pub const ZERO: PricingResult = PricingResult {
        sale_price: 0.0,
        net_profit: 0.0,
        total_marketplace_fee: 0.0,
        tax_amount: 0.0,
        total_product_cost: 0.0,
        return_on_cost_percent: 0.0,
        markup_percent: 0.0,
        markup_multiplier: 0.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PricingOutcome {
    Feasible(PricingResult),
    /// Fees plus the requested margin consume the whole sale price.
    InfeasibleMargin {
        denominator: f64,
        max_margin_percent: f64,
    },
}

impl PricingOutcome {
    /// Figures to display; an infeasible margin renders as all zeros.
    pub fn breakdown(&self) -> PricingResult {
        match self {
            PricingOutcome::Feasible(result) => *result,
            PricingOutcome::InfeasibleMargin { .. } => PricingResult::ZERO,
        }
    }

    pub fn is_feasible(&self) -> bool {
        matches!(self, PricingOutcome::Feasible(_))
    }
}

/// Derives the sale price that covers product cost, marketplace fees and the
/// desired margin, where fees and margin are both shares of the sale price:
///
/// `price = (total_cost + fixed_fee) / (1 - commission - transaction - margin)`
pub fn compute_pricing(input: &PricingInput, fees: &FeeSchedule) -> PricingOutcome {
    let effective_cost = input.product_cost * f64::from(input.cost_multiplier);
    let tax_amount = effective_cost * input.tax_rate_percent / 100.0;
    let total_product_cost =
        effective_cost + tax_amount + input.variable_expenses + input.extra_cost;

    let commission_rate = fees.commission_rate(input.free_shipping_program);
    let denominator = 1.0
        - commission_rate
        - fees.transaction_fee_rate
        - input.desired_margin_percent / 100.0;

    if denominator <= 0.0 {
        return PricingOutcome::InfeasibleMargin {
            denominator,
            max_margin_percent: fees.max_margin_percent(input.free_shipping_program),
        };
    }

    let sale_price = (total_product_cost + fees.fixed_fee_per_item) / denominator;
    let total_marketplace_fee = sale_price * commission_rate
        + sale_price * fees.transaction_fee_rate
        + fees.fixed_fee_per_item;
    let net_profit = sale_price - total_product_cost - total_marketplace_fee;

    let (return_on_cost_percent, markup_percent, markup_multiplier) = if total_product_cost > 0.0
    {
        (
            net_profit / total_product_cost * 100.0,
            (sale_price - total_product_cost) / total_product_cost * 100.0,
            sale_price / total_product_cost,
        )
    } else {
        (0.0, 0.0, 0.0)
    };

    PricingOutcome::Feasible(PricingResult {
        sale_price,
        net_profit,
        total_marketplace_fee,
        tax_amount,
        total_product_cost,
        return_on_cost_percent,
        markup_percent,
        markup_multiplier,
    })
}
