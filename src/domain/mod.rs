//! Pricing domain: fee schedule, the sale-price formula and the form model.

pub mod app_state;
pub mod fees;
pub mod multiplier;
pub mod pricing;

#[allow(unused_imports)]
pub use app_state::{CalculatorState, PricingSnapshot};
#[allow(unused_imports)]
pub use fees::{FeeSchedule, FeeScheduleError};
pub use multiplier::CostMultiplier;
#[allow(unused_imports)]
pub use pricing::{compute_pricing, PricingInput, PricingOutcome, PricingResult};
