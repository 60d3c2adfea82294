//! Display formatting for calculator results (Brazilian real, pt-BR style).

const NBSP: char = '\u{a0}';

/// `R$ 1.234,56`; negative amounts read `-R$ 1,00`.
pub fn format_currency(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let fraction = cents % 100;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}R${NBSP}{whole},{fraction:02}")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

pub fn format_multiplier(value: f64) -> String {
    format!("{value:.2}X")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfitTone {
    Positive,
    Negative,
    Neutral,
}

impl ProfitTone {
    pub fn from_profit(net_profit: f64) -> Self {
        if net_profit > 0.0 {
            ProfitTone::Positive
        } else if net_profit < 0.0 {
            ProfitTone::Negative
        } else {
            ProfitTone::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_and_rounds() {
        assert_eq!(format_currency(0.0), "R$\u{a0}0,00");
        assert_eq!(format_currency(102.325_581), "R$\u{a0}102,33");
        assert_eq!(format_currency(1234.5), "R$\u{a0}1.234,50");
        assert_eq!(format_currency(1_000_000.0), "R$\u{a0}1.000.000,00");
    }

    #[test]
    fn currency_sign_handling() {
        assert_eq!(format_currency(-12.3), "-R$\u{a0}12,30");
        assert_eq!(format_currency(-0.001), "R$\u{a0}0,00");
        assert_eq!(format_currency(f64::NAN), "R$\u{a0}0,00");
    }

    #[test]
    fn percent_and_multiplier() {
        assert_eq!(format_percent(65.0), "65.00%");
        assert_eq!(format_percent(12.345_6), "12.35%");
        assert_eq!(format_multiplier(1.650_4), "1.65X");
    }

    #[test]
    fn tone_follows_profit_sign() {
        assert_eq!(ProfitTone::from_profit(3.0), ProfitTone::Positive);
        assert_eq!(ProfitTone::from_profit(-0.5), ProfitTone::Negative);
        assert_eq!(ProfitTone::from_profit(0.0), ProfitTone::Neutral);
    }
}
