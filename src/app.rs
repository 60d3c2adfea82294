use dioxus::prelude::*;

use crate::{
    domain::CalculatorState,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{CalculatorPage, FeesPage},
        shell::Shell,
    },
    util::{assets, config::load_fee_schedule},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Calculator {},
    #[route("/taxas")]
    Fees {},
}

#[component]
pub fn App() -> Element {
    // The multiplier and form fields live here for the whole session; every
    // render recomputes the price from them.
    let state = use_signal(|| CalculatorState::with_fees(load_fee_schedule()));
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn Fees() -> Element {
    rsx! { Shell { FeesPage {} } }
}
