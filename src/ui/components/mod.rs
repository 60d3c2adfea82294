pub mod kpi_card;
pub mod money_field;
pub mod multiplier_control;
pub mod profit_indicator;
pub mod toast;
