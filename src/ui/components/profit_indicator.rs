use dioxus::prelude::*;

use crate::ui::theme;
use crate::util::format::{format_currency, ProfitTone};

/// Net profit per sale, coloured by sign.
#[component]
pub fn ProfitIndicator(net_profit: f64) -> Element {
    let tone = ProfitTone::from_profit(net_profit);
    let value_class = format!("profit-value {}", theme::profit_text(tone));
    let label = theme::profit_label(tone);

    rsx! {
        div {
            class: "profit-indicator",
            div {
                class: "profit-header",
                span { "Lucro por venda" }
                span { class: theme::profit_text(tone), "{label}" }
            }
            p { class: value_class, {format_currency(net_profit)} }
        }
    }
}
