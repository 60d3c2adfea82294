use dioxus::prelude::*;

use crate::domain::CostMultiplier;
use crate::ui::theme;

/// Up/down arrows around the current bulk-lot size.
#[component]
pub fn MultiplierControl(
    multiplier: CostMultiplier,
    on_increment: EventHandler<()>,
    on_decrement: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "multiplier-control",
            button {
                class: theme::btn_arrow(),
                title: "Aumentar quantidade",
                onclick: move |_| on_increment.call(()),
                "▲"
            }
            span { class: "multiplier", "{multiplier}" }
            button {
                class: theme::btn_arrow(),
                title: "Diminuir quantidade",
                disabled: multiplier.get() <= 1,
                onclick: move |_| on_decrement.call(()),
                "▼"
            }
        }
    }
}
