use dioxus::prelude::*;
use tracing::info;

use crate::{
    domain::{CalculatorState, FeeSchedule},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
};

#[component]
pub fn FeesPage() -> Element {
    let state = use_context::<Signal<CalculatorState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let initial = state.with(|st| st.fees);
    let mut standard_input = use_signal(|| percent_text(initial.standard_commission_rate));
    let mut free_shipping_input =
        use_signal(|| percent_text(initial.free_shipping_commission_rate));
    let mut transaction_input = use_signal(|| percent_text(initial.transaction_fee_rate));
    let mut fixed_fee_input = use_signal(|| amount_text(initial.fixed_fee_per_item));

    let current = state.with(|st| st.fees);
    let max_margin_standard = current.max_margin_percent(false);
    let max_margin_free_shipping = current.max_margin_percent(true);

    let on_apply = {
        let mut state = state;
        move |_| {
            let parsed = parse_fee_schedule(
                &standard_input(),
                &free_shipping_input(),
                &transaction_input(),
                &fixed_fee_input(),
            );

            match parsed {
                Ok(fees) => {
                    state.with_mut(|st| st.fees = fees);
                    info!(?fees, "fee schedule updated");
                    push_toast(toasts, ToastKind::Success, "Taxas atualizadas.");
                }
                Err(message) => {
                    push_toast(toasts, ToastKind::Error, message);
                }
            }
        }
    };

    let on_reset = {
        let mut state = state;
        move |_| {
            let defaults = FeeSchedule::default();
            standard_input.set(percent_text(defaults.standard_commission_rate));
            free_shipping_input.set(percent_text(defaults.free_shipping_commission_rate));
            transaction_input.set(percent_text(defaults.transaction_fee_rate));
            fixed_fee_input.set(amount_text(defaults.fixed_fee_per_item));
            state.with_mut(|st| st.fees = defaults);
            info!("fee schedule restored to defaults");
            push_toast(toasts, ToastKind::Info, "Taxas padrão restauradas.");
        }
    };

    rsx! {
        div { class: "stack",
            section {
                class: theme::panel(),
                h2 { class: "panel-title", "Taxas do marketplace" }
                div { class: "fee-grid",
                    div { class: "field",
                        label { class: theme::label_class(), "Comissão padrão (%)" }
                        input {
                            class: theme::input_class(),
                            inputmode: "decimal",
                            value: standard_input(),
                            oninput: move |evt| standard_input.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { class: theme::label_class(), "Comissão com Frete Grátis (%)" }
                        input {
                            class: theme::input_class(),
                            inputmode: "decimal",
                            value: free_shipping_input(),
                            oninput: move |evt| free_shipping_input.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { class: theme::label_class(), "Taxa de transação (%)" }
                        input {
                            class: theme::input_class(),
                            inputmode: "decimal",
                            value: transaction_input(),
                            oninput: move |evt| transaction_input.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { class: theme::label_class(), "Taxa fixa por item (R$)" }
                        input {
                            class: theme::input_class(),
                            inputmode: "decimal",
                            value: fixed_fee_input(),
                            oninput: move |evt| fixed_fee_input.set(evt.value()),
                        }
                    }
                }
                div { class: "actions",
                    button { class: theme::btn_primary(), onclick: on_apply, "Aplicar" }
                    button { class: theme::btn_secondary(), onclick: on_reset, "Restaurar padrão" }
                }
            }

            section {
                class: theme::panel(),
                h2 { class: "panel-title", "Margem máxima possível" }
                p { class: "muted", "Acima destes valores taxas e margem consomem todo o preço de venda." }
                ul { class: "limit-list",
                    li {
                        span { "Vendedor padrão" }
                        span { {format!("{max_margin_standard:.1}%")} }
                    }
                    li {
                        span { "Programa de Frete Grátis" }
                        span { {format!("{max_margin_free_shipping:.1}%")} }
                    }
                }
            }
        }
    }
}

fn percent_text(rate: f64) -> String {
    format!("{:.2}", rate * 100.0).replace('.', ",")
}

fn amount_text(value: f64) -> String {
    format!("{value:.2}").replace('.', ",")
}

fn parse_number(raw: &str, field: &str) -> Result<f64, String> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| format!("{field} deve ser numérico"))
}

/// Reads the settings form. Rates are typed as percentages.
fn parse_fee_schedule(
    standard: &str,
    free_shipping: &str,
    transaction: &str,
    fixed_fee: &str,
) -> Result<FeeSchedule, String> {
    let fees = FeeSchedule {
        standard_commission_rate: parse_number(standard, "Comissão padrão")? / 100.0,
        free_shipping_commission_rate: parse_number(free_shipping, "Comissão com Frete Grátis")?
            / 100.0,
        transaction_fee_rate: parse_number(transaction, "Taxa de transação")? / 100.0,
        fixed_fee_per_item: parse_number(fixed_fee, "Taxa fixa")?,
    };
    fees.validate().map_err(|err| err.to_string())?;
    Ok(fees)
}
