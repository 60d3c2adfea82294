use dioxus::prelude::*;
use tracing::{info, warn};

use crate::{
    domain::{CalculatorState, PricingOutcome},
    ui::{
        components::{
            kpi_card::KpiCard,
            money_field::MoneyField,
            multiplier_control::MultiplierControl,
            profit_indicator::ProfitIndicator,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
    util::format::{format_currency, format_multiplier, format_percent},
};

#[component]
pub fn CalculatorPage() -> Element {
    let mut state = use_context::<Signal<CalculatorState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut exported = use_signal(|| None::<String>);

    let form = state();
    let outcome = form.outcome();
    let result = outcome.breakdown();
    let result_class = if outcome.is_feasible() {
        theme::panel().to_string()
    } else {
        format!("{} result-infeasible", theme::panel())
    };
    let commission_caption = format!(
        "comissão {:.0}%",
        form.fees.commission_rate(form.free_shipping) * 100.0
    );
    let infeasible_notice = match outcome {
        PricingOutcome::InfeasibleMargin {
            max_margin_percent, ..
        } => Some(format!(
            "Margem impossível: taxas e margem somam 100% ou mais do preço. Use menos de {:.1}%.",
            max_margin_percent
        )),
        PricingOutcome::Feasible(_) => None,
    };

    let on_reset = move |_| {
        state.with_mut(|st| st.reset());
        exported.set(None);
        info!("calculator reset");
        push_toast(toasts, ToastKind::Info, "Calculadora reiniciada.");
    };

    let on_export = move |_| {
        let (snapshot, feasible) = state.with(|st| (st.snapshot(), st.outcome().is_feasible()));
        if !feasible {
            push_toast(
                toasts,
                ToastKind::Warning,
                "Margem impossível: o preço exportado está zerado.",
            );
        }
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => {
                info!("exported calculation: {json}");
                exported.set(Some(json));
            }
            Err(err) => {
                warn!("failed to serialize snapshot: {err}");
                push_toast(
                    toasts,
                    ToastKind::Error,
                    format!("Falha ao exportar dados: {err}"),
                );
            }
        }
    };

    rsx! {
        div { class: "calculator-grid",
            section {
                class: theme::panel(),
                h2 { class: "panel-title", "Dados do produto" }

                label {
                    class: "toggle",
                    input {
                        r#type: "checkbox",
                        checked: form.free_shipping,
                        onchange: move |_| state.with_mut(|st| st.free_shipping = !st.free_shipping),
                    }
                    span { "Programa de Frete Grátis" }
                    span { class: "toggle-caption", "{commission_caption}" }
                }

                div { class: "field-with-control",
                    MoneyField {
                        label: "Custo do produto (R$)".to_string(),
                        value: form.product_cost.clone(),
                        on_change: move |text: String| state.with_mut(|st| st.product_cost = text),
                    }
                    MultiplierControl {
                        multiplier: form.multiplier,
                        on_increment: move |_| state.with_mut(|st| st.multiplier.increment()),
                        on_decrement: move |_| state.with_mut(|st| st.multiplier.decrement()),
                    }
                }
                MoneyField {
                    label: "Impostos (%)".to_string(),
                    value: form.tax_rate.clone(),
                    percent: true,
                    on_change: move |text: String| state.with_mut(|st| st.tax_rate = text),
                }
                MoneyField {
                    label: "Despesas variáveis (R$)".to_string(),
                    value: form.variable_expenses.clone(),
                    on_change: move |text: String| state.with_mut(|st| st.variable_expenses = text),
                }
                MoneyField {
                    label: "Custo extra (R$)".to_string(),
                    value: form.extra_cost.clone(),
                    on_change: move |text: String| state.with_mut(|st| st.extra_cost = text),
                }

                div { class: "field",
                    label { class: theme::label_class(), "Margem de lucro desejada" }
                    div { class: "field-row",
                        input {
                            class: "slider",
                            r#type: "range",
                            min: "0",
                            max: "100",
                            step: "1",
                            value: "{form.margin_percent}",
                            oninput: move |evt| state.with_mut(|st| st.margin_percent = evt.value()),
                        }
                        span { class: "margin-value", "{form.margin_percent}%" }
                    }
                }

                div { class: "actions",
                    button { class: theme::btn_secondary(), onclick: on_reset, "Limpar" }
                    button { class: theme::btn_primary(), onclick: on_export, "Exportar dados" }
                }
            }

            section {
                class: result_class,
                h2 { class: "panel-title", "Resultado" }
                if let Some(notice) = infeasible_notice {
                    p { class: "notice-warning", "{notice}" }
                }
                KpiCard {
                    title: "Preço de venda".to_string(),
                    value: format_currency(result.sale_price),
                    description: Some(format!("para {} unidade(s)", form.multiplier.get())),
                }
                ProfitIndicator { net_profit: result.net_profit }
                div { class: "kpi-grid",
                    KpiCard { title: "Taxa do marketplace".to_string(), value: format_currency(result.total_marketplace_fee) }
                    KpiCard { title: "Valor dos impostos".to_string(), value: format_currency(result.tax_amount) }
                    KpiCard { title: "Custo total".to_string(), value: format_currency(result.total_product_cost) }
                    KpiCard { title: "Retorno sobre o produto".to_string(), value: format_percent(result.return_on_cost_percent) }
                    KpiCard { title: "Markup".to_string(), value: format_percent(result.markup_percent) }
                    KpiCard { title: "Markup (X)".to_string(), value: format_multiplier(result.markup_multiplier) }
                }
                if let Some(json) = exported() {
                    div { class: "export",
                        h3 { class: "kpi-title", "Dados exportados" }
                        pre { "{json}" }
                    }
                }
            }
        }
    }
}
