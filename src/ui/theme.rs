//! Class names shared across pages. The rules live in `assets/main.css`.

use crate::util::format::ProfitTone;

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary() -> &'static str {
    "btn btn-primary"
}

pub fn btn_secondary() -> &'static str {
    "btn btn-secondary"
}

pub fn btn_arrow() -> &'static str {
    "btn-arrow"
}

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-btn nav-btn-active"
    } else {
        "nav-btn"
    }
}

// ============================================
// PANELS / FORMS
// ============================================

pub fn panel() -> &'static str {
    "panel"
}

pub fn label_class() -> &'static str {
    "field-label"
}

pub fn input_class() -> &'static str {
    "field-input"
}

// ============================================
// RESULT STYLES
// ============================================

pub fn profit_text(tone: ProfitTone) -> &'static str {
    match tone {
        ProfitTone::Positive => "text-profit",
        ProfitTone::Negative => "text-loss",
        ProfitTone::Neutral => "text-even",
    }
}

pub fn profit_label(tone: ProfitTone) -> &'static str {
    match tone {
        ProfitTone::Positive => "Lucro",
        ProfitTone::Negative => "Prejuízo",
        ProfitTone::Neutral => "Sem lucro",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tone_has_its_own_colour() {
        let classes = [
            profit_text(ProfitTone::Positive),
            profit_text(ProfitTone::Negative),
            profit_text(ProfitTone::Neutral),
        ];
        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
        assert_ne!(classes[0], classes[2]);
    }
}
