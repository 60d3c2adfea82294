use dioxus::prelude::*;

use crate::ui::theme;
use crate::util::number::{format_field, format_tax_field, sanitize_numeric_text};

/// Numeric text field: strips stray characters while typing and renders two
/// decimals on blur. Percentage fields are capped at 100.
#[component]
pub fn MoneyField(
    label: String,
    value: String,
    #[props(default)] percent: bool,
    on_change: EventHandler<String>,
) -> Element {
    let current = value.clone();
    rsx! {
        div {
            class: "field",
            label { class: theme::label_class(), "{label}" }
            div {
                class: "field-row",
                input {
                    class: theme::input_class(),
                    inputmode: "decimal",
                    placeholder: "0,00",
                    value: "{value}",
                    oninput: move |evt| on_change.call(sanitize_numeric_text(&evt.value())),
                    onblur: move |_| {
                        let formatted = if percent {
                            format_tax_field(&current)
                        } else {
                            format_field(&current)
                        };
                        on_change.call(formatted);
                    },
                }
            }
        }
    }
}
