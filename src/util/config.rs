use tracing::{info, warn};

use crate::domain::FeeSchedule;
use crate::util::assets::{load_text, FEE_SCHEDULE_PATH};

/// Fee schedule bundled with the app; defaults apply when the embedded file
/// is missing or invalid.
pub fn load_fee_schedule() -> FeeSchedule {
    let raw = match load_text(FEE_SCHEDULE_PATH) {
        Ok(raw) => raw,
        Err(err) => {
            warn!("{err}; using built-in fee schedule");
            return FeeSchedule::default();
        }
    };

    match FeeSchedule::from_json(&raw) {
        Ok(fees) => {
            info!(
                standard = fees.standard_commission_rate,
                free_shipping = fees.free_shipping_commission_rate,
                transaction = fees.transaction_fee_rate,
                fixed = fees.fixed_fee_per_item,
                "loaded fee schedule"
            );
            fees
        }
        Err(err) => {
            warn!("invalid fee schedule in {FEE_SCHEDULE_PATH}: {err}; using built-in defaults");
            FeeSchedule::default()
        }
    }
}
